use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::db::models::{DbLoker, NewLoker};
use crate::views::format::datetime_local;

/// Body of `POST /api/admin/loker`. Missing strings deserialize as empty and
/// fail their minimum length instead of rejecting the whole body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLoker {
    #[validate(
        length(min = 5, message = "Judul minimal 5 karakter"),
        custom(function = "max_200", message = "Judul maksimal 200 karakter")
    )]
    pub judul: String,

    #[validate(
        length(min = 2, message = "Nama perusahaan minimal 2 karakter"),
        custom(function = "max_200", message = "Nama perusahaan maksimal 200 karakter")
    )]
    pub nama_perusahaan: String,

    #[validate(custom(function = "logo_url", message = "URL logo tidak valid"))]
    pub logo_perusahaan: Option<String>,

    #[validate(
        length(min = 3, message = "Lokasi minimal 3 karakter"),
        custom(function = "max_200", message = "Lokasi maksimal 200 karakter")
    )]
    pub lokasi: String,

    #[validate(length(min = 20, message = "Deskripsi minimal 20 karakter"))]
    pub deskripsi: String,

    #[validate(length(min = 10, message = "Kualifikasi minimal 10 karakter"))]
    pub kualifikasi: String,

    #[validate(length(min = 10, message = "Cara melamar minimal 10 karakter"))]
    pub cara_melamar: String,

    #[validate(custom(function = "iso_datetime", message = "Format tanggal tidak valid"))]
    pub batas_waktu: String,

    #[validate(required(message = "Status publikasi wajib diisi"))]
    pub is_published: Option<bool>,
}

/// Body of `PUT /api/admin/loker/{id}`: the create rules, every field optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateLoker {
    #[validate(
        length(min = 5, message = "Judul minimal 5 karakter"),
        custom(function = "max_200", message = "Judul maksimal 200 karakter")
    )]
    pub judul: Option<String>,

    #[validate(
        length(min = 2, message = "Nama perusahaan minimal 2 karakter"),
        custom(function = "max_200", message = "Nama perusahaan maksimal 200 karakter")
    )]
    pub nama_perusahaan: Option<String>,

    #[validate(custom(function = "logo_url", message = "URL logo tidak valid"))]
    pub logo_perusahaan: Option<String>,

    #[validate(
        length(min = 3, message = "Lokasi minimal 3 karakter"),
        custom(function = "max_200", message = "Lokasi maksimal 200 karakter")
    )]
    pub lokasi: Option<String>,

    #[validate(length(min = 20, message = "Deskripsi minimal 20 karakter"))]
    pub deskripsi: Option<String>,

    #[validate(length(min = 10, message = "Kualifikasi minimal 10 karakter"))]
    pub kualifikasi: Option<String>,

    #[validate(length(min = 10, message = "Cara melamar minimal 10 karakter"))]
    pub cara_melamar: Option<String>,

    #[validate(custom(function = "iso_datetime", message = "Format tanggal tidak valid"))]
    pub batas_waktu: Option<String>,

    pub is_published: Option<bool>,
}

/// Query string of `GET /api/admin/loker`. Kept as raw strings so bad numbers
/// surface as validation errors rather than extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLokerQuery {
    pub published: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Admin HTML form for a posting. Input names match the JSON wire names so
/// validation messages can be placed next to their inputs; an unchecked
/// publish box is simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LokerForm {
    pub judul: String,
    pub nama_perusahaan: String,
    pub logo_perusahaan: String,
    pub lokasi: String,
    pub deskripsi: String,
    pub kualifikasi: String,
    pub cara_melamar: String,
    /// `YYYY-MM-DDTHH:MM` from a `datetime-local` input, read as UTC.
    pub batas_waktu: String,
    pub is_published: Option<String>,
}

impl LokerForm {
    pub fn from_record(loker: &DbLoker) -> Self {
        Self {
            judul: loker.judul.clone(),
            nama_perusahaan: loker.nama_perusahaan.clone(),
            logo_perusahaan: loker.logo_perusahaan.clone().unwrap_or_default(),
            lokasi: loker.lokasi.clone(),
            deskripsi: loker.deskripsi.clone(),
            kualifikasi: loker.kualifikasi.clone(),
            cara_melamar: loker.cara_melamar.clone(),
            batas_waktu: datetime_local(&loker.batas_waktu),
            is_published: loker.is_published.then(|| "on".to_string()),
        }
    }

    pub fn published(&self) -> bool {
        self.is_published.is_some()
    }

    pub fn to_create(&self) -> CreateLoker {
        CreateLoker {
            judul: self.judul.clone(),
            nama_perusahaan: self.nama_perusahaan.clone(),
            logo_perusahaan: Some(self.logo_perusahaan.clone()),
            lokasi: self.lokasi.clone(),
            deskripsi: self.deskripsi.clone(),
            kualifikasi: self.kualifikasi.clone(),
            cara_melamar: self.cara_melamar.clone(),
            batas_waktu: datetime_local_to_iso(&self.batas_waktu),
            is_published: Some(self.published()),
        }
    }

    /// Every field is submitted, so the patch sets all of them.
    pub fn to_update(&self) -> UpdateLoker {
        let create = self.to_create();
        UpdateLoker {
            judul: Some(create.judul),
            nama_perusahaan: Some(create.nama_perusahaan),
            logo_perusahaan: create.logo_perusahaan,
            lokasi: Some(create.lokasi),
            deskripsi: Some(create.deskripsi),
            kualifikasi: Some(create.kualifikasi),
            cara_melamar: Some(create.cara_melamar),
            batas_waktu: Some(create.batas_waktu),
            is_published: create.is_published,
        }
    }
}

/// `2025-12-31T23:59` -> `2025-12-31T23:59:00.000Z`. Other input passes through
/// untouched and is left for validation to reject.
pub fn datetime_local_to_iso(value: &str) -> String {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .map(|naive| naive.format("%Y-%m-%dT%H:%M:00.000Z").to_string())
        .unwrap_or_else(|_| trimmed.to_string())
}

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

impl CreateLoker {
    /// Convert an already validated payload into an insertable row.
    pub fn into_new(self) -> Result<NewLoker, ValidationError> {
        let batas_waktu = parse_deadline(&self.batas_waktu).ok_or_else(invalid_datetime)?;
        Ok(NewLoker {
            judul: self.judul,
            nama_perusahaan: self.nama_perusahaan,
            logo_perusahaan: self.logo_perusahaan.filter(|logo| !logo.is_empty()),
            lokasi: self.lokasi,
            deskripsi: self.deskripsi,
            kualifikasi: self.kualifikasi,
            cara_melamar: self.cara_melamar,
            batas_waktu,
            is_published: self.is_published.unwrap_or(false),
        })
    }
}

/// Parse an ISO-8601 UTC timestamp of the form `YYYY-MM-DDTHH:MM:SS[.fff]Z`,
/// kept to millisecond precision.
pub fn parse_deadline(value: &str) -> Option<DateTime<Utc>> {
    if value.as_bytes().get(10) != Some(&b'T') || !value.ends_with('Z') {
        return None;
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
}

fn invalid_datetime() -> ValidationError {
    ValidationError::new("datetime").with_message("Format tanggal tidak valid".into())
}

fn iso_datetime(value: &str) -> Result<(), ValidationError> {
    parse_deadline(value).map(|_| ()).ok_or_else(invalid_datetime)
}

fn logo_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || url::Url::parse(value).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("url"))
}

pub(crate) fn max_200(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() <= 200 {
        return Ok(());
    }
    Err(ValidationError::new("length"))
}
