use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::PrivateCookieJar;
use tracing::{info, warn};
use validator::Validate;

use crate::auth::session::{clear_session, store_session};
use crate::auth::{self as portal_auth, Session};
use crate::error::PortalError;
use crate::handlers::PageError;
use crate::middleware::AdminSession;
use crate::middleware::session::{DASHBOARD_PATH, LOGIN_PATH};
use crate::router::PortalState;
use crate::types::auth::LoginForm;
use crate::views;

/// GET /admin/login
pub async fn login_page() -> Html<String> {
    Html(views::admin::login("", None, &[]).into_string())
}

/// POST /admin/login : Anonymous -> Authenticated on a matching credential.
pub async fn login(
    State(state): State<PortalState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    if let Err(errors) = form.validate() {
        let err = PortalError::from(errors);
        let markup = views::admin::login(&form.username, None, err.field_errors());
        return Ok((StatusCode::BAD_REQUEST, Html(markup.into_string())).into_response());
    }

    let Some(admin) = portal_auth::authenticate(&state.storage, &form.username, &form.password).await?
    else {
        warn!(username = %form.username, "login rejected");
        let markup = views::admin::login(&form.username, Some("Username atau password salah"), &[]);
        return Ok((StatusCode::UNAUTHORIZED, Html(markup.into_string())).into_response());
    };

    let session = Session::issue(&admin, state.session.ttl_hours);
    let jar = store_session(jar, &session, &state.session)
        .map_err(|e| PortalError::Internal(format!("encode session: {e}")).logged("POST /admin/login"))?;
    info!(username = %admin.username, "admin signed in");
    Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
}

/// POST /admin/logout : Authenticated -> Anonymous.
pub async fn logout(AdminSession(session): AdminSession, jar: PrivateCookieJar) -> impl IntoResponse {
    info!(username = %session.username, "admin signed out");
    (clear_session(jar), Redirect::to(LOGIN_PATH))
}
