use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::db::PublishFilter;
use crate::error::PortalError;
use crate::handlers::PageError;
use crate::router::PortalState;
use crate::service::{halaman, loker};
use crate::views;
use crate::views::public::Pager;

pub const HOME_PAGE_SIZE: i64 = 9;

/// `?page=` is kept raw; anything that is not a positive number means page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// GET / : published postings only, newest first.
pub async fn home(
    State(state): State<PortalState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let page = page_number(query.page.as_deref());
    let params = loker::ListParams {
        filter: PublishFilter::Published,
        limit: HOME_PAGE_SIZE,
        offset: page_offset(page, HOME_PAGE_SIZE),
    };
    let (items, total) = loker::list(&state.storage, params).await?;
    let pager = Pager {
        page,
        total_pages: total_pages(total, HOME_PAGE_SIZE),
    };
    Ok(Html(views::public::home(&items, &pager).into_string()))
}

/// GET /loker/{id} : drafts and unknown ids both render the not-found view.
pub async fn loker_detail(
    State(state): State<PortalState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    let found = match id.parse::<i64>() {
        Ok(id) => loker::get_published(&state.storage, id).await?,
        Err(_) => None,
    };
    match found {
        Some(posting) => Ok(Html(views::public::loker_detail(&posting).into_string()).into_response()),
        None => Ok(not_found_page(
            "Lowongan Tidak Ditemukan",
            "Lowongan kerja yang Anda cari tidak tersedia atau sudah tidak dipublikasikan.",
        )),
    }
}

/// GET /{slug}
pub async fn halaman_page(
    State(state): State<PortalState>,
    Path(slug): Path<String>,
) -> Result<Response, PageError> {
    match state.storage.get_halaman(&slug).await? {
        Some(page) => Ok(Html(views::public::halaman(&page).into_string()).into_response()),
        None => Ok(not_found_page("Halaman Tidak Ditemukan", halaman::NOT_FOUND_MESSAGE)),
    }
}

/// Fallback. Unrouted API paths answer with the JSON envelope.
pub async fn not_found(uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return PortalError::NotFound("Resource tidak ditemukan".to_string()).into_response();
    }
    not_found_page(
        "Halaman Tidak Ditemukan",
        "Maaf, halaman yang Anda cari tidak tersedia.",
    )
}

fn not_found_page(title: &str, message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::public::not_found(title, message).into_string()),
    )
        .into_response()
}

pub(crate) fn total_pages(total: i64, page_size: i64) -> i64 {
    ((total + page_size - 1) / page_size).max(1)
}

pub(crate) fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Rows to skip for a 1-based page; huge pages saturate instead of overflowing.
pub(crate) fn page_offset(page: i64, page_size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_fall_back_to_first_page() {
        assert_eq!(page_number(None), 1);
        assert_eq!(page_number(Some("3")), 3);
        assert_eq!(page_number(Some("0")), 1);
        assert_eq!(page_number(Some("-4")), 1);
        assert_eq!(page_number(Some("abc")), 1);
        assert_eq!(page_number(Some("99999999999999999999")), 1);
    }

    #[test]
    fn offsets_saturate() {
        assert_eq!(page_offset(1, 9), 0);
        assert_eq!(page_offset(3, 10), 20);
        assert_eq!(page_offset(i64::MAX, 9), i64::MAX);
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
    }
}
