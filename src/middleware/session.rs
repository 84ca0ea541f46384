use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;

use crate::auth::{AuthState, Session};
use crate::error::PortalError;

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Decode the session cookie once per request and expose the result as an
/// `AuthState` extension for the gates and handlers further in.
pub async fn resolve_session(jar: PrivateCookieJar, mut request: Request, next: Next) -> Response {
    let state = AuthState::from_jar(&jar, Utc::now());
    request.extensions_mut().insert(state);
    next.run(request).await
}

fn is_authenticated(request: &Request) -> bool {
    request
        .extensions()
        .get::<AuthState>()
        .is_some_and(AuthState::is_authenticated)
}

/// Which gate guards a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// `/api/admin` and below: anonymous callers get the 401 envelope.
    Api,
    /// The login form: signed-in admins go straight to the dashboard.
    Login,
    /// `/admin` and below: anonymous visitors are sent to the login form.
    Page,
    Open,
}

fn under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl Gate {
    pub fn for_path(path: &str) -> Self {
        if under(path, "/api/admin") {
            Gate::Api
        } else if path == LOGIN_PATH {
            Gate::Login
        } else if under(path, "/admin") {
            Gate::Page
        } else {
            Gate::Open
        }
    }
}

/// Runs before routing, so admin-prefixed paths without a route are gated too.
pub async fn admin_gate(request: Request, next: Next) -> Response {
    let authenticated = is_authenticated(&request);
    match Gate::for_path(request.uri().path()) {
        Gate::Api if !authenticated => {
            tracing::warn!(path = %request.uri().path(), "unauthenticated API request rejected");
            PortalError::Unauthorized.into_response()
        }
        Gate::Page if !authenticated => Redirect::to(LOGIN_PATH).into_response(),
        Gate::Login if authenticated => Redirect::to(DASHBOARD_PATH).into_response(),
        _ => next.run(request).await,
    }
}

/// The authenticated admin of the current request.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = PortalError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthState>() {
            Some(AuthState::Authenticated(session)) => Ok(Self(session.clone())),
            _ => Err(PortalError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_covers_whole_admin_prefixes() {
        assert_eq!(Gate::for_path("/api/admin"), Gate::Api);
        assert_eq!(Gate::for_path("/api/admin/tidak-ada"), Gate::Api);
        assert_eq!(Gate::for_path("/admin/login"), Gate::Login);
        assert_eq!(Gate::for_path("/admin"), Gate::Page);
        assert_eq!(Gate::for_path("/admin/dashboard/tidak-ada"), Gate::Page);
        assert_eq!(Gate::for_path("/administrasi"), Gate::Open);
        assert_eq!(Gate::for_path("/api/administrasi"), Gate::Open);
        assert_eq!(Gate::for_path("/"), Gate::Open);
    }
}
