//! tally counter service.
//!
//! Boot sequence:
//! - strict env config (DATABASE_URI, PORT, RETRY_*)
//! - eager connection-URI parse (parse failure is fatal)
//! - store connect under bounded retry with a PING probe; an unreachable
//!   store leaves the process serving per-request 503s instead of exiting
//! - axum serve

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use tally_service::store::credentials::StoreCredentials;
use tally_service::store::redis::RedisStore;
use tally_service::{app_state::AppState, config::Config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = Config::from_env().expect("config load failed");
    let creds = StoreCredentials::parse(&cfg.database_uri)
        .expect("DATABASE_URI must be a valid store URI");

    let state = match RedisStore::connect(&creds, &cfg.retry).await {
        Ok(store) => AppState::new(Arc::new(store)),
        Err(e) => {
            tracing::error!(error = %e, "store unreachable at boot, serving degraded");
            AppState::degraded()
        }
    };

    let app = router::build_router(state);
    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    tracing::info!(%listen, "tally-service starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
