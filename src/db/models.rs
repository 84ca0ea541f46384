use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::loker::UpdateLoker;

/// Admin account. The password hash never leaves the storage/auth layers.
#[derive(Debug, Clone)]
pub struct DbAdmin {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Static page addressed by its slug.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DbHalaman {
    pub id: i64,
    pub slug: String,
    pub judul: String,
    pub konten: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job posting row.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DbLoker {
    pub id: i64,
    pub judul: String,
    pub nama_perusahaan: String,
    pub logo_perusahaan: Option<String>,
    pub lokasi: String,
    pub deskripsi: String,
    pub kualifikasi: String,
    pub cara_melamar: String,
    pub batas_waktu: DateTime<Utc>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable job posting, produced from a validated create payload.
#[derive(Debug, Clone)]
pub struct NewLoker {
    pub judul: String,
    pub nama_perusahaan: String,
    pub logo_perusahaan: Option<String>,
    pub lokasi: String,
    pub deskripsi: String,
    pub kualifikasi: String,
    pub cara_melamar: String,
    pub batas_waktu: DateTime<Utc>,
    pub is_published: bool,
}

impl DbLoker {
    /// Merge a validated partial update onto this record, field by field.
    /// An empty logo URL clears the logo.
    pub fn apply(&mut self, patch: UpdateLoker, batas_waktu: Option<DateTime<Utc>>) {
        if let Some(judul) = patch.judul {
            self.judul = judul;
        }
        if let Some(nama) = patch.nama_perusahaan {
            self.nama_perusahaan = nama;
        }
        if let Some(logo) = patch.logo_perusahaan {
            self.logo_perusahaan = (!logo.is_empty()).then_some(logo);
        }
        if let Some(lokasi) = patch.lokasi {
            self.lokasi = lokasi;
        }
        if let Some(deskripsi) = patch.deskripsi {
            self.deskripsi = deskripsi;
        }
        if let Some(kualifikasi) = patch.kualifikasi {
            self.kualifikasi = kualifikasi;
        }
        if let Some(cara) = patch.cara_melamar {
            self.cara_melamar = cara;
        }
        if let Some(batas) = batas_waktu {
            self.batas_waktu = batas;
        }
        if let Some(published) = patch.is_published {
            self.is_published = published;
        }
    }
}

/// Publish-status filter for posting lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishFilter {
    #[default]
    All,
    Published,
    Draft,
}

impl PublishFilter {
    pub(crate) fn as_flag(self) -> Option<bool> {
        match self {
            PublishFilter::All => None,
            PublishFilter::Published => Some(true),
            PublishFilter::Draft => Some(false),
        }
    }
}
