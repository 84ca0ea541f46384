use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portal_bkk::auth::SessionSettings;
use portal_bkk::auth::session::cookie_key;
use portal_bkk::db::{PortalStorage, seed};
use portal_bkk::router::{PortalState, portal_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &portal_bkk::config::CONFIG;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.basic.database_url,
        listen_addr = %cfg.basic.listen_addr,
        loglevel = %cfg.basic.loglevel,
        session_ttl_hours = cfg.basic.session_ttl_hours,
        insecure_cookie = cfg.basic.insecure_cookie,
    );

    let storage = PortalStorage::connect(&cfg.basic.database_url).await?;

    if cfg.seed.enabled {
        if let Err(e) = seed::seed(&storage, &cfg.seed).await {
            warn!(error = %e, "failed to seed database");
        }
    } else {
        info!("seeding disabled");
    }

    let session = SessionSettings {
        ttl_hours: cfg.basic.session_ttl_hours.max(1),
        secure_cookie: !cfg.basic.insecure_cookie,
    };
    let state = PortalState::new(storage, cookie_key(&cfg.basic.session_secret), session);
    let app = portal_router(state);

    let listener = TcpListener::bind(cfg.basic.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
