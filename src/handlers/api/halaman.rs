use axum::extract::{Path, State};

use crate::db::DbHalaman;
use crate::error::PortalError;
use crate::middleware::{AdminSession, JsonBody};
use crate::router::PortalState;
use crate::service;
use crate::types::ApiSuccess;
use crate::types::halaman::UpdateHalaman;

/// GET /api/admin/halaman
pub async fn list(
    State(state): State<PortalState>,
    _admin: AdminSession,
) -> Result<ApiSuccess<Vec<DbHalaman>>, PortalError> {
    let pages = service::halaman::list(&state.storage)
        .await
        .map_err(|e| e.logged("GET /api/admin/halaman"))?;
    Ok(ApiSuccess::data(pages))
}

/// GET /api/admin/halaman/{slug}
pub async fn get(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(slug): Path<String>,
) -> Result<ApiSuccess<DbHalaman>, PortalError> {
    let page = service::halaman::get(&state.storage, &slug)
        .await
        .map_err(|e| e.logged("GET /api/admin/halaman/{slug}"))?;
    Ok(ApiSuccess::data(page))
}

/// PUT /api/admin/halaman/{slug}
pub async fn update(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<UpdateHalaman>,
) -> Result<ApiSuccess<DbHalaman>, PortalError> {
    let page = service::halaman::update(&state.storage, &slug, payload)
        .await
        .map_err(|e| e.logged("PUT /api/admin/halaman/{slug}"))?;
    Ok(ApiSuccess::data(page).with_message("Halaman berhasil diupdate"))
}
