use portal_bkk::auth::authenticate;
use portal_bkk::config::SeedConfig;
use portal_bkk::db::{PortalStorage, seed};

fn seed_config(username: &str, password: &str) -> SeedConfig {
    SeedConfig {
        enabled: true,
        admin_username: username.to_string(),
        admin_email: "bkk@smk.sch.id".to_string(),
        admin_password: password.to_string(),
    }
}

#[tokio::test]
async fn second_admin_may_share_an_email() {
    let storage = PortalStorage::in_memory().await.unwrap();
    seed::seed(&storage, &seed_config("admin", "rahasia-123")).await.unwrap();
    seed::seed(&storage, &seed_config("operator", "operator-456")).await.unwrap();

    let admin = authenticate(&storage, "admin", "rahasia-123").await.unwrap();
    let operator = authenticate(&storage, "operator", "operator-456").await.unwrap();
    assert!(admin.is_some());
    let operator = operator.expect("second admin should have been inserted");
    assert_eq!(operator.email, "bkk@smk.sch.id");
}

#[tokio::test]
async fn reseeding_keeps_existing_rows() {
    let storage = PortalStorage::in_memory().await.unwrap();
    seed::seed(&storage, &seed_config("admin", "rahasia-123")).await.unwrap();
    storage
        .update_halaman("profil-bkk", "Profil Kami", "<p>Konten yang sudah diedit.</p>")
        .await
        .unwrap();

    seed::seed(&storage, &seed_config("admin", "kata-sandi-baru")).await.unwrap();

    assert_eq!(storage.count_halaman().await.unwrap(), 3);
    let page = storage.get_halaman("profil-bkk").await.unwrap().unwrap();
    assert_eq!(page.judul, "Profil Kami");
    assert!(authenticate(&storage, "admin", "rahasia-123").await.unwrap().is_some());
    assert!(authenticate(&storage, "admin", "kata-sandi-baru").await.unwrap().is_none());
}
