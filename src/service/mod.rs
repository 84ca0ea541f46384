//! Validation + persistence shared by the JSON API and the admin forms.

pub mod halaman;
pub mod loker;
