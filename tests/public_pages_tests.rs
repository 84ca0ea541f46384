mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{create_loker, get_page, location, login_cookie, post_form, send_json, test_app, valid_loker};

#[tokio::test]
async fn home_lists_only_published_postings() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let mut published = valid_loker();
    published["judul"] = json!("Teknisi Jaringan");
    published["isPublished"] = json!(true);
    create_loker(&app, &cookie, published).await;
    create_loker(&app, &cookie, valid_loker()).await;

    let (status, html) = get_page(&app, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Teknisi Jaringan"));
    assert!(!html.contains("Staff Marketing"));
}

#[tokio::test]
async fn static_pages_render_and_unknown_paths_are_not_found() {
    let (app, _storage) = test_app().await;

    let (status, html) = get_page(&app, "/visi-misi", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Visi"));

    let (status, _) = get_page(&app, "/tidak-ada", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_page(&app, "/loker/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_page(&app, "/a/b/c", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_form_creates_and_toggles_posting() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let form = "judul=Operator+Produksi&namaPerusahaan=PT+Sinar+Abadi&logoPerusahaan=\
        &lokasi=Bekasi&deskripsi=Mengoperasikan+mesin+produksi+sesuai+SOP.\
        &kualifikasi=Lulusan+SMK+Teknik+Mesin&caraMelamar=Datang+langsung+ke+kantor\
        &batasWaktu=2025-12-31T23%3A59";
    let resp = post_form(&app, "/admin/dashboard/loker/create", Some(&cookie), form).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/dashboard/loker"));

    let (_, list) = send_json(&app, "GET", "/api/admin/loker", Some(&cookie), None).await;
    assert_eq!(list["total"], 1);
    let created = &list["data"][0];
    assert_eq!(created["judul"], "Operator Produksi");
    assert_eq!(created["isPublished"], false);
    assert_eq!(created["batasWaktu"], "2025-12-31T23:59:00Z");
    let id = created["id"].as_i64().unwrap();

    let (status, html) = get_page(&app, "/admin/dashboard/loker?status=draft", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Operator Produksi"));

    let resp = post_form(&app, &format!("/admin/dashboard/loker/{id}/publish"), Some(&cookie), "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let (_, home) = get_page(&app, "/", None).await;
    assert!(home.contains("Operator Produksi"));

    let resp = post_form(&app, &format!("/admin/dashboard/loker/{id}/delete"), Some(&cookie), "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let (_, list) = send_json(&app, "GET", "/api/admin/loker", Some(&cookie), None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn invalid_dashboard_form_is_rerendered_with_errors() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let resp = post_form(
        &app,
        "/admin/dashboard/loker/create",
        Some(&cookie),
        "judul=Ops&namaPerusahaan=PT+Sinar+Abadi",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = common::body_text(resp).await;
    assert!(html.contains("Periksa kembali isian formulir."));
    assert!(html.contains("Judul minimal 5 karakter"));
    assert!(html.contains("PT Sinar Abadi"));

    let (_, list) = send_json(&app, "GET", "/api/admin/loker", Some(&cookie), None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn out_of_range_page_numbers_render_an_empty_page() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let mut published = valid_loker();
    published["isPublished"] = json!(true);
    create_loker(&app, &cookie, published).await;

    let (status, html) = get_page(&app, "/?page=9223372036854775807", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("Staff Marketing"));

    let (status, _) = get_page(&app, "/admin/dashboard/loker?page=9223372036854775807", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_numeric_page_falls_back_to_first_page() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;

    let mut published = valid_loker();
    published["isPublished"] = json!(true);
    create_loker(&app, &cookie, published).await;

    for uri in ["/?page=abc", "/?page=-2", "/?page="] {
        let (status, html) = get_page(&app, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(html.contains("Staff Marketing"), "{uri}");
    }

    let (status, html) = get_page(&app, "/admin/dashboard/loker?status=semua&page=abc", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Staff Marketing"));
}

const EDIT_FORM: &str = "judul=Staff+Marketing+Senior&namaPerusahaan=PT+Maju+Jaya&logoPerusahaan=\
    &lokasi=Bandung&deskripsi=Memimpin+tim+pemasaran+untuk+wilayah+Jawa+Barat.\
    &kualifikasi=Pengalaman+minimal+dua+tahun&caraMelamar=Kirim+CV+ke+hrd%40majujaya.co.id\
    &batasWaktu=2026-01-15T17%3A00&isPublished=on";

#[tokio::test]
async fn edit_form_updates_posting() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;
    let id = create_loker(&app, &cookie, valid_loker()).await;

    let (status, html) = get_page(&app, &format!("/admin/dashboard/loker/{id}/edit"), Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Edit Lowongan Kerja"));
    assert!(html.contains("2025-12-31T23:59"));

    let resp = post_form(&app, &format!("/admin/dashboard/loker/{id}/edit"), Some(&cookie), EDIT_FORM).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/dashboard/loker"));

    let (_, fetched) = send_json(&app, "GET", &format!("/api/admin/loker/{id}"), Some(&cookie), None).await;
    let data = &fetched["data"];
    assert_eq!(data["judul"], "Staff Marketing Senior");
    assert_eq!(data["lokasi"], "Bandung");
    assert_eq!(data["caraMelamar"], "Kirim CV ke hrd@majujaya.co.id");
    assert_eq!(data["batasWaktu"], "2026-01-15T17:00:00Z");
    assert_eq!(data["isPublished"], true);
    assert!(data["logoPerusahaan"].is_null());

    let (_, home) = get_page(&app, "/", None).await;
    assert!(home.contains("Staff Marketing Senior"));
}

#[tokio::test]
async fn invalid_edit_form_is_rerendered_and_keeps_record() {
    let (app, _storage) = test_app().await;
    let cookie = login_cookie(&app).await;
    let id = create_loker(&app, &cookie, valid_loker()).await;

    let form = EDIT_FORM.replace("lokasi=Bandung", "lokasi=BD");
    let resp = post_form(&app, &format!("/admin/dashboard/loker/{id}/edit"), Some(&cookie), &form).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let html = common::body_text(resp).await;
    assert!(html.contains("Periksa kembali isian formulir."));
    assert!(html.contains("Lokasi minimal 3 karakter"));
    assert!(html.contains("Staff Marketing Senior"));

    let (_, fetched) = send_json(&app, "GET", &format!("/api/admin/loker/{id}"), Some(&cookie), None).await;
    assert_eq!(fetched["data"]["judul"], "Staff Marketing");
    assert_eq!(fetched["data"]["lokasi"], "Jakarta Selatan");

    let resp = post_form(&app, "/admin/dashboard/loker/999/edit", Some(&cookie), EDIT_FORM).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
