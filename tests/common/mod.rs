#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use axum_extra::extract::cookie::Key;
use serde_json::{Value, json};
use tower::ServiceExt;

use portal_bkk::auth::SessionSettings;
use portal_bkk::config::SeedConfig;
use portal_bkk::db::{PortalStorage, seed};
use portal_bkk::router::{PortalState, portal_router};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "rahasia-123";

/// Router over a fresh in-memory database seeded with one admin and the default pages.
pub async fn test_app() -> (Router, PortalStorage) {
    let storage = PortalStorage::in_memory()
        .await
        .expect("failed to open in-memory database");
    let seed_cfg = SeedConfig {
        enabled: true,
        admin_username: ADMIN_USERNAME.to_string(),
        admin_email: "admin@bkk-smk.sch.id".to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
    };
    seed::seed(&storage, &seed_cfg)
        .await
        .expect("failed to seed database");

    let session = SessionSettings {
        ttl_hours: 1,
        secure_cookie: false,
    };
    let state = PortalState::new(storage.clone(), Key::generate(), session);
    (portal_router(state), storage)
}

/// Sign in through the login form and return the `name=value` session cookie.
pub async fn login_cookie(app: &Router) -> String {
    let resp = post_form(
        app,
        "/admin/login",
        None,
        &format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    session_cookie(&resp).expect("login did not set a session cookie")
}

pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("portal_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed")
}

/// Send and decode the JSON envelope.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let resp = send(app, method, uri, cookie, body).await;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = serde_json::from_slice(&bytes).expect("response body was not JSON");
    (status, value)
}

pub async fn post_form(app: &Router, uri: &str, cookie: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(
            builder
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

pub async fn get_page(app: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let resp = send(app, "GET", uri, cookie, None).await;
    let status = resp.status();
    (status, body_text(resp).await)
}

pub fn valid_loker() -> Value {
    json!({
        "judul": "Staff Marketing",
        "namaPerusahaan": "PT Maju Jaya",
        "logoPerusahaan": "",
        "lokasi": "Jakarta Selatan",
        "deskripsi": "Memasarkan produk perusahaan kepada pelanggan baru di area Jakarta.",
        "kualifikasi": "Lulusan SMK semua jurusan, komunikatif",
        "caraMelamar": "Kirim CV ke hrd@majujaya.co.id",
        "batasWaktu": "2025-12-31T23:59:00.000Z",
        "isPublished": false
    })
}

/// Create a posting through the API and return its id.
pub async fn create_loker(app: &Router, cookie: &str, body: Value) -> i64 {
    let (status, value) = send_json(app, "POST", "/api/admin/loker", Some(cookie), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {value}");
    value["data"]["id"].as_i64().expect("created record has an id")
}
