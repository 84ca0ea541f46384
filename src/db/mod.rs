//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the storage handle and its queries
//! - `seed.rs`: default admin account and static pages

pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use models::{DbAdmin, DbHalaman, DbLoker, NewLoker, PublishFilter};
pub use schema::SQLITE_INIT;
pub use sqlite::{PortalStorage, SqlitePool};
