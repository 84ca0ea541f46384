use validator::Validate;

use crate::db::{DbHalaman, PortalStorage};
use crate::error::PortalError;
use crate::types::halaman::UpdateHalaman;

pub const NOT_FOUND_MESSAGE: &str = "Halaman tidak ditemukan";

pub async fn list(storage: &PortalStorage) -> Result<Vec<DbHalaman>, PortalError> {
    storage.list_halaman().await
}

pub async fn get(storage: &PortalStorage, slug: &str) -> Result<DbHalaman, PortalError> {
    storage
        .get_halaman(slug)
        .await?
        .ok_or_else(|| PortalError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// Replace title and content. The slug is never rewritten.
pub async fn update(
    storage: &PortalStorage,
    slug: &str,
    payload: UpdateHalaman,
) -> Result<DbHalaman, PortalError> {
    get(storage, slug).await?;
    payload.validate()?;
    let halaman = storage
        .update_halaman(slug, &payload.judul, &payload.konten)
        .await?;
    tracing::info!(slug, "static page updated");
    Ok(halaman)
}
