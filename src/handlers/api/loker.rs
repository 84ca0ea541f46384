use axum::extract::{Path, Query, State};

use crate::db::DbLoker;
use crate::error::PortalError;
use crate::middleware::{AdminSession, JsonBody};
use crate::router::PortalState;
use crate::service::loker::{self, ListParams};
use crate::types::ApiSuccess;
use crate::types::loker::{CreateLoker, ListLokerQuery, UpdateLoker};

/// GET /api/admin/loker?published=&limit=&offset=
pub async fn list(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Query(query): Query<ListLokerQuery>,
) -> Result<ApiSuccess<Vec<DbLoker>>, PortalError> {
    let params = ListParams::try_from(&query)?;
    let (items, total) = loker::list(&state.storage, params)
        .await
        .map_err(|e| e.logged("GET /api/admin/loker"))?;
    Ok(ApiSuccess::data(items).with_total(total))
}

/// POST /api/admin/loker
pub async fn create(
    State(state): State<PortalState>,
    _admin: AdminSession,
    JsonBody(payload): JsonBody<CreateLoker>,
) -> Result<ApiSuccess<DbLoker>, PortalError> {
    let created = loker::create(&state.storage, payload)
        .await
        .map_err(|e| e.logged("POST /api/admin/loker"))?;
    Ok(ApiSuccess::data(created)
        .with_message("Lowongan kerja berhasil dibuat")
        .created())
}

/// GET /api/admin/loker/{id}
pub async fn get(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<ApiSuccess<DbLoker>, PortalError> {
    let id = loker::parse_id(&id)?;
    let found = loker::get(&state.storage, id)
        .await
        .map_err(|e| e.logged("GET /api/admin/loker/{id}"))?;
    Ok(ApiSuccess::data(found))
}

/// PUT /api/admin/loker/{id}
pub async fn update(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateLoker>,
) -> Result<ApiSuccess<DbLoker>, PortalError> {
    let id = loker::parse_id(&id)?;
    let updated = loker::update(&state.storage, id, patch)
        .await
        .map_err(|e| e.logged("PUT /api/admin/loker/{id}"))?;
    Ok(ApiSuccess::data(updated).with_message("Lowongan kerja berhasil diupdate"))
}

/// DELETE /api/admin/loker/{id}
pub async fn delete(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<ApiSuccess<()>, PortalError> {
    let id = loker::parse_id(&id)?;
    loker::delete(&state.storage, id)
        .await
        .map_err(|e| e.logged("DELETE /api/admin/loker/{id}"))?;
    Ok(ApiSuccess::message("Lowongan kerja berhasil dihapus"))
}
