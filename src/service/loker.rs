use validator::Validate;

use crate::db::{DbLoker, PortalStorage, PublishFilter};
use crate::error::{FieldError, PortalError};
use crate::types::loker::{
    CreateLoker, DEFAULT_LIMIT, ListLokerQuery, MAX_LIMIT, UpdateLoker, parse_deadline,
};

pub const NOT_FOUND_MESSAGE: &str = "Lowongan kerja tidak ditemukan";

/// Parsed and bounded list parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub filter: PublishFilter,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            filter: PublishFilter::All,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl TryFrom<&ListLokerQuery> for ListParams {
    type Error = PortalError;

    fn try_from(query: &ListLokerQuery) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        // Any value other than "true" selects drafts, matching the admin UI's filter.
        let filter = match query.published.as_deref() {
            None => PublishFilter::All,
            Some("true") => PublishFilter::Published,
            Some(_) => PublishFilter::Draft,
        };

        let limit = match query.limit.as_deref().map(str::parse::<i64>) {
            None => DEFAULT_LIMIT,
            Some(Ok(n)) if (1..=MAX_LIMIT).contains(&n) => n,
            Some(_) => {
                errors.push(FieldError {
                    field: "limit".to_string(),
                    message: format!("Limit harus berupa angka 1 sampai {MAX_LIMIT}"),
                });
                DEFAULT_LIMIT
            }
        };

        let offset = match query.offset.as_deref().map(str::parse::<i64>) {
            None => 0,
            Some(Ok(n)) if n >= 0 => n,
            Some(_) => {
                errors.push(FieldError {
                    field: "offset".to_string(),
                    message: "Offset harus berupa angka positif".to_string(),
                });
                0
            }
        };

        if !errors.is_empty() {
            return Err(PortalError::Validation(errors));
        }
        Ok(Self {
            filter,
            limit,
            offset,
        })
    }
}

/// Ids are integers; anything else cannot name a posting.
pub fn parse_id(raw: &str) -> Result<i64, PortalError> {
    raw.parse::<i64>()
        .map_err(|_| PortalError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// One page of postings plus the total matching the filter.
pub async fn list(
    storage: &PortalStorage,
    params: ListParams,
) -> Result<(Vec<DbLoker>, i64), PortalError> {
    futures::try_join!(
        storage.list_loker(params.filter, params.limit, params.offset),
        storage.count_loker(params.filter),
    )
}

pub async fn get(storage: &PortalStorage, id: i64) -> Result<DbLoker, PortalError> {
    storage
        .get_loker(id)
        .await?
        .ok_or_else(|| PortalError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// Public lookup: drafts are indistinguishable from missing postings.
pub async fn get_published(
    storage: &PortalStorage,
    id: i64,
) -> Result<Option<DbLoker>, PortalError> {
    Ok(storage.get_loker(id).await?.filter(|loker| loker.is_published))
}

pub async fn create(storage: &PortalStorage, payload: CreateLoker) -> Result<DbLoker, PortalError> {
    payload.validate()?;
    let new = payload.into_new().map_err(|e| {
        PortalError::Validation(vec![FieldError {
            field: "batasWaktu".to_string(),
            message: e
                .message
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Format tanggal tidak valid".to_string()),
        }])
    })?;
    let loker = storage.create_loker(new).await?;
    tracing::info!(id = loker.id, published = loker.is_published, "job posting created");
    Ok(loker)
}

/// Partial update. Existence is checked before the payload is validated.
pub async fn update(
    storage: &PortalStorage,
    id: i64,
    patch: UpdateLoker,
) -> Result<DbLoker, PortalError> {
    let mut loker = get(storage, id).await?;
    patch.validate()?;
    let batas_waktu = patch.batas_waktu.as_deref().and_then(parse_deadline);
    loker.apply(patch, batas_waktu);
    let loker = storage.save_loker(loker).await?;
    tracing::info!(id, published = loker.is_published, "job posting updated");
    Ok(loker)
}

pub async fn set_published(
    storage: &PortalStorage,
    id: i64,
    published: bool,
) -> Result<DbLoker, PortalError> {
    update(
        storage,
        id,
        UpdateLoker {
            is_published: Some(published),
            ..Default::default()
        },
    )
    .await
}

pub async fn delete(storage: &PortalStorage, id: i64) -> Result<(), PortalError> {
    if !storage.delete_loker(id).await? {
        return Err(PortalError::NotFound(NOT_FOUND_MESSAGE.to_string()));
    }
    tracing::info!(id, "job posting deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(published: Option<&str>, limit: Option<&str>, offset: Option<&str>) -> ListLokerQuery {
        ListLokerQuery {
            published: published.map(Into::into),
            limit: limit.map(Into::into),
            offset: offset.map(Into::into),
        }
    }

    #[test]
    fn list_params_defaults() {
        let params = ListParams::try_from(&query(None, None, None)).unwrap();
        assert_eq!(params, ListParams::default());
    }

    #[test]
    fn list_params_parse_filter_and_paging() {
        let params = ListParams::try_from(&query(Some("true"), Some("5"), Some("10"))).unwrap();
        assert_eq!(params.filter, PublishFilter::Published);
        assert_eq!((params.limit, params.offset), (5, 10));
        let drafts = ListParams::try_from(&query(Some("false"), None, None)).unwrap();
        assert_eq!(drafts.filter, PublishFilter::Draft);
    }

    #[test]
    fn list_params_reject_bad_numbers() {
        let err = ListParams::try_from(&query(None, Some("abc"), Some("-1"))).unwrap_err();
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["limit", "offset"]);
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        assert_eq!(parse_id("abc").unwrap_err().code(), crate::error::NOT_FOUND);
        assert_eq!(parse_id("42").unwrap(), 42);
    }
}
