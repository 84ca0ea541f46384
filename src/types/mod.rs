pub mod auth;
pub mod envelope;
pub mod halaman;
pub mod loker;

pub use envelope::ApiSuccess;
