use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use time::Duration;
use tracing::warn;

use crate::db::models::DbAdmin;

pub const SESSION_COOKIE: &str = "portal_session";

/// Authenticated admin carried inside the encrypted session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub admin_id: i64,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn issue(admin: &DbAdmin, ttl_hours: i64) -> Self {
        Self {
            admin_id: admin.id,
            username: admin.username.clone(),
            expires_at: Utc::now() + chrono::Duration::hours(ttl_hours),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Request-scoped authentication state, inserted by the session middleware.
#[derive(Debug, Clone, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    /// Decode the session cookie. Missing, undecodable or expired cookies are anonymous.
    pub fn from_jar(jar: &PrivateCookieJar, now: DateTime<Utc>) -> Self {
        let Some(cookie) = jar.get(SESSION_COOKIE) else {
            return AuthState::Anonymous;
        };
        match serde_json::from_str::<Session>(cookie.value()) {
            Ok(session) if !session.is_expired(now) => AuthState::Authenticated(session),
            Ok(session) => {
                tracing::debug!(username = %session.username, "session expired");
                AuthState::Anonymous
            }
            Err(e) => {
                warn!(error = %e, "discarding undecodable session cookie");
                AuthState::Anonymous
            }
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            AuthState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}

/// Cookie attributes shared by every session write.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub ttl_hours: i64,
    pub secure_cookie: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_hours: 24,
            secure_cookie: true,
        }
    }
}

pub fn store_session(
    jar: PrivateCookieJar,
    session: &Session,
    settings: &SessionSettings,
) -> Result<PrivateCookieJar, serde_json::Error> {
    let value = serde_json::to_string(session)?;
    let cookie = Cookie::build(Cookie::new(SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.secure_cookie)
        .max_age(Duration::hours(settings.ttl_hours))
        .build();
    Ok(jar.add(cookie))
}

pub fn clear_session(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.remove(
        Cookie::build(Cookie::new(SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Build the cookie encryption key from base64 secret material (>= 64 bytes).
/// Anything shorter falls back to a random per-process key.
pub fn cookie_key(secret: &str) -> Key {
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(secret.trim())
        .unwrap_or_default();
    if decoded.len() >= 64 {
        return Key::from(decoded.as_slice());
    }
    if !secret.is_empty() {
        warn!("session_secret must decode to at least 64 bytes; using a random key");
    } else {
        warn!("session_secret not set; sessions will not survive a restart");
    }
    Key::generate()
}
