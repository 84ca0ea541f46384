//! Server-rendered HTML, built with maud.

pub mod admin;
pub mod format;
pub mod layout;
pub mod public;
