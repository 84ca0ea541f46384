//! SQL DDL for initializing the portal storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `admins`: login credentials, only `username` is UNIQUE, `password` holds an argon2 PHC string
/// - `halaman`: static pages addressed by a UNIQUE `slug`
/// - `loker`: job postings, `is_published` BOOLEAN (stored as INTEGER 0/1)
/// - Timestamps are RFC3339 text
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS admins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS halaman (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    slug TEXT NOT NULL UNIQUE,
    judul TEXT NOT NULL,
    konten TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS loker (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    judul TEXT NOT NULL,
    nama_perusahaan TEXT NOT NULL,
    logo_perusahaan TEXT NULL,
    lokasi TEXT NOT NULL,
    deskripsi TEXT NOT NULL,
    kualifikasi TEXT NOT NULL,
    cara_melamar TEXT NOT NULL,
    batas_waktu TEXT NOT NULL,
    is_published INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Public listing filters on the publish flag and orders by creation time.
CREATE INDEX IF NOT EXISTS idx_loker_published_created ON loker(is_published, created_at);
"#;
