mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{get_page, login_cookie, send_json, test_app};

#[tokio::test]
async fn seeded_pages_are_listed_in_creation_order() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let (status, body) = send_json(&app, "GET", "/api/admin/halaman", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["slug"].as_str())
        .collect();
    assert_eq!(slugs, ["profil-bkk", "visi-misi", "tracer-study"]);
}

#[tokio::test]
async fn unknown_slug_is_not_found() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let (status, body) = send_json(&app, "GET", "/api/admin/halaman/lowongan", Some(&cookie), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Halaman tidak ditemukan");

    let patch = json!({ "judul": "Judul Baru", "konten": "<p>Konten yang cukup panjang.</p>" });
    let (status, _) = send_json(&app, "PUT", "/api/admin/halaman/lowongan", Some(&cookie), Some(patch)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn short_content_is_rejected_and_page_kept() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let (_, before) = send_json(&app, "GET", "/api/admin/halaman/profil-bkk", Some(&cookie), None).await;

    let patch = json!({ "judul": "Profil BKK", "konten": "pendek" });
    let (status, body) = send_json(&app, "PUT", "/api/admin/halaman/profil-bkk", Some(&cookie), Some(patch)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"][0]["field"], "konten");

    let (_, after) = send_json(&app, "GET", "/api/admin/halaman/profil-bkk", Some(&cookie), None).await;
    assert_eq!(before["data"], after["data"]);
}

#[tokio::test]
async fn update_is_visible_on_public_page() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let patch = json!({
        "judul": "Tentang BKK Kami",
        "konten": "<p>Bursa kerja khusus untuk alumni SMK.</p>"
    });
    let (status, body) = send_json(&app, "PUT", "/api/admin/halaman/profil-bkk", Some(&cookie), Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Halaman berhasil diupdate");
    assert_eq!(body["data"]["slug"], "profil-bkk");
    assert_eq!(body["data"]["judul"], "Tentang BKK Kami");

    let (status, html) = get_page(&app, "/profil-bkk", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Tentang BKK Kami"));
    assert!(html.contains("<p>Bursa kerja khusus untuk alumni SMK.</p>"));
}
