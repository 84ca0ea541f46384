use std::sync::Arc;

use axum::extract::FromRef;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;

use crate::auth::SessionSettings;
use crate::db::PortalStorage;
use crate::handlers::{admin, api, auth, public};
use crate::middleware::session::{admin_gate, resolve_session};

#[derive(Clone)]
pub struct PortalState {
    pub storage: PortalStorage,
    pub cookie_key: Key,
    pub session: Arc<SessionSettings>,
}

impl PortalState {
    pub fn new(storage: PortalStorage, cookie_key: Key, session: SessionSettings) -> Self {
        Self {
            storage,
            cookie_key,
            session: Arc::new(session),
        }
    }
}

impl FromRef<PortalState> for Key {
    fn from_ref(state: &PortalState) -> Self {
        state.cookie_key.clone()
    }
}

/// Admin prefixes are gated as a whole by `admin_gate`, which sits inside
/// `resolve_session` and also sees requests that end in the fallback.
pub fn portal_router(state: PortalState) -> Router {
    let api = Router::new()
        .route("/api/admin/halaman", get(api::halaman::list))
        .route(
            "/api/admin/halaman/{slug}",
            get(api::halaman::get).put(api::halaman::update),
        )
        .route(
            "/api/admin/loker",
            get(api::loker::list).post(api::loker::create),
        )
        .route(
            "/api/admin/loker/{id}",
            get(api::loker::get)
                .put(api::loker::update)
                .delete(api::loker::delete),
        );

    let admin_pages = Router::new()
        .route(
            "/admin/login",
            get(auth::login_page).post(auth::login),
        )
        .route("/admin", get(admin::admin_root))
        .route("/admin/logout", post(auth::logout))
        .route("/admin/dashboard", get(admin::dashboard))
        .route("/admin/dashboard/loker", get(admin::loker_index))
        .route(
            "/admin/dashboard/loker/create",
            get(admin::loker_new).post(admin::loker_create),
        )
        .route(
            "/admin/dashboard/loker/{id}/edit",
            get(admin::loker_edit).post(admin::loker_update),
        )
        .route(
            "/admin/dashboard/loker/{id}/publish",
            post(admin::loker_toggle_publish),
        )
        .route(
            "/admin/dashboard/loker/{id}/delete",
            post(admin::loker_delete),
        )
        .route("/admin/dashboard/halaman", get(admin::halaman_index))
        .route(
            "/admin/dashboard/halaman/{slug}/edit",
            get(admin::halaman_edit).post(admin::halaman_update),
        );

    Router::new()
        .route("/", get(public::home))
        .route("/loker/{id}", get(public::loker_detail))
        .route("/{slug}", get(public::halaman_page))
        .merge(api)
        .merge(admin_pages)
        .fallback(public::not_found)
        .layer(from_fn(admin_gate))
        .layer(from_fn_with_state(state.clone(), resolve_session))
        .with_state(state)
}
