//! Admin dashboard pages. Writes go through the same service functions as
//! the JSON API; validation failures re-render the form with inline errors.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::db::PublishFilter;
use crate::error::PortalError;
use crate::handlers::PageError;
use crate::handlers::public::{page_number, page_offset, total_pages};
use crate::middleware::AdminSession;
use crate::middleware::session::DASHBOARD_PATH;
use crate::router::PortalState;
use crate::service::{halaman, loker};
use crate::types::halaman::UpdateHalaman;
use crate::types::loker::LokerForm;
use crate::views;
use crate::views::admin::{DashboardStats, LokerListView};

pub const ADMIN_PAGE_SIZE: i64 = 10;
const LOKER_INDEX: &str = "/admin/dashboard/loker";

/// GET /admin
pub async fn admin_root() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
) -> Result<Html<String>, PageError> {
    let (total_loker, published_loker, total_halaman) = futures::try_join!(
        state.storage.count_loker(PublishFilter::All),
        state.storage.count_loker(PublishFilter::Published),
        state.storage.count_halaman(),
    )?;
    let stats = DashboardStats {
        total_loker,
        published_loker,
        total_halaman,
    };
    Ok(Html(views::admin::dashboard(&session.username, &stats).into_string()))
}

#[derive(Debug, Default, Deserialize)]
pub struct LokerIndexQuery {
    pub status: Option<String>,
    pub page: Option<String>,
}

/// GET /admin/dashboard/loker?status=semua|published|draft&page=
pub async fn loker_index(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
    Query(query): Query<LokerIndexQuery>,
) -> Result<Html<String>, PageError> {
    let filter = match query.status.as_deref() {
        Some("published") => PublishFilter::Published,
        Some("draft") => PublishFilter::Draft,
        _ => PublishFilter::All,
    };
    let page = page_number(query.page.as_deref());
    let params = loker::ListParams {
        filter,
        limit: ADMIN_PAGE_SIZE,
        offset: page_offset(page, ADMIN_PAGE_SIZE),
    };
    let (items, total) = loker::list(&state.storage, params).await?;
    let view = LokerListView {
        items: &items,
        total,
        filter,
        page,
        total_pages: total_pages(total, ADMIN_PAGE_SIZE),
    };
    Ok(Html(views::admin::loker_list(&session.username, &view).into_string()))
}

/// GET /admin/dashboard/loker/create
pub async fn loker_new(AdminSession(session): AdminSession) -> Html<String> {
    let markup = views::admin::loker_form(&session.username, None, &LokerForm::default(), &[], None);
    Html(markup.into_string())
}

/// POST /admin/dashboard/loker/create
pub async fn loker_create(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
    Form(form): Form<LokerForm>,
) -> Result<Response, PageError> {
    match loker::create(&state.storage, form.to_create()).await {
        Ok(_) => Ok(Redirect::to(LOKER_INDEX).into_response()),
        Err(err @ PortalError::Validation(_)) => {
            let markup = views::admin::loker_form(
                &session.username,
                None,
                &form,
                err.field_errors(),
                Some("Periksa kembali isian formulir."),
            );
            Ok((StatusCode::BAD_REQUEST, Html(markup.into_string())).into_response())
        }
        Err(err) => Err(err.logged("POST /admin/dashboard/loker/create").into()),
    }
}

/// GET /admin/dashboard/loker/{id}/edit
pub async fn loker_edit(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = loker::parse_id(&id)?;
    let record = loker::get(&state.storage, id).await?;
    let form = LokerForm::from_record(&record);
    let markup = views::admin::loker_form(&session.username, Some(id), &form, &[], None);
    Ok(Html(markup.into_string()))
}

/// POST /admin/dashboard/loker/{id}/edit
pub async fn loker_update(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
    Path(id): Path<String>,
    Form(form): Form<LokerForm>,
) -> Result<Response, PageError> {
    let id = loker::parse_id(&id)?;
    match loker::update(&state.storage, id, form.to_update()).await {
        Ok(_) => Ok(Redirect::to(LOKER_INDEX).into_response()),
        Err(err @ PortalError::Validation(_)) => {
            let markup = views::admin::loker_form(
                &session.username,
                Some(id),
                &form,
                err.field_errors(),
                Some("Periksa kembali isian formulir."),
            );
            Ok((StatusCode::BAD_REQUEST, Html(markup.into_string())).into_response())
        }
        Err(err) => Err(err.logged("POST /admin/dashboard/loker/{id}/edit").into()),
    }
}

/// POST /admin/dashboard/loker/{id}/publish : flip the publish flag.
pub async fn loker_toggle_publish(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    let id = loker::parse_id(&id)?;
    let current = loker::get(&state.storage, id).await?;
    loker::set_published(&state.storage, id, !current.is_published).await?;
    Ok(Redirect::to(LOKER_INDEX))
}

/// POST /admin/dashboard/loker/{id}/delete
pub async fn loker_delete(
    State(state): State<PortalState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    let id = loker::parse_id(&id)?;
    loker::delete(&state.storage, id).await?;
    Ok(Redirect::to(LOKER_INDEX))
}

/// GET /admin/dashboard/halaman
pub async fn halaman_index(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
) -> Result<Html<String>, PageError> {
    let pages = halaman::list(&state.storage).await?;
    Ok(Html(views::admin::halaman_list(&session.username, &pages).into_string()))
}

/// GET /admin/dashboard/halaman/{slug}/edit
pub async fn halaman_edit(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
    Path(slug): Path<String>,
) -> Result<Html<String>, PageError> {
    let page = halaman::get(&state.storage, &slug).await?;
    let form = UpdateHalaman {
        judul: page.judul,
        konten: page.konten,
    };
    let markup = views::admin::halaman_form(&session.username, &slug, &form, &[], None);
    Ok(Html(markup.into_string()))
}

/// POST /admin/dashboard/halaman/{slug}/edit
pub async fn halaman_update(
    State(state): State<PortalState>,
    AdminSession(session): AdminSession,
    Path(slug): Path<String>,
    Form(form): Form<UpdateHalaman>,
) -> Result<Response, PageError> {
    match halaman::update(&state.storage, &slug, form.clone()).await {
        Ok(_) => Ok(Redirect::to("/admin/dashboard/halaman").into_response()),
        Err(err @ PortalError::Validation(_)) => {
            let markup = views::admin::halaman_form(
                &session.username,
                &slug,
                &form,
                err.field_errors(),
                Some("Periksa kembali isian formulir."),
            );
            Ok((StatusCode::BAD_REQUEST, Html(markup.into_string())).into_response())
        }
        Err(err) => Err(err.logged("POST /admin/dashboard/halaman/{slug}/edit").into()),
    }
}
