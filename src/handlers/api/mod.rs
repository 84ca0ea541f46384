//! JSON handlers under `/api/admin`, all wrapped in the `{success, ...}` envelope.

pub mod halaman;
pub mod loker;
