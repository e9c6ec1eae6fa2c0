use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::address::HttpAddressClient;
use service::student::{SeaOrmStudentStore, StudentService};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Address service endpoint from config.toml, env vars filling the gaps.
fn load_address_config() -> anyhow::Result<configs::AddressServiceConfig> {
    let mut cfg = configs::load_default()
        .map(|c| c.address_service)
        .unwrap_or_default();
    cfg.normalize_from_env();
    cfg.validate()?;
    Ok(cfg)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection
    let db = models::db::connect().await?;

    // Outbound address service client
    let addr_cfg = load_address_config()?;
    info!(base_url = %addr_cfg.base_url, "address service endpoint configured");
    let addresses = Arc::new(HttpAddressClient::new(
        addr_cfg.base_url,
        addr_cfg.username,
        addr_cfg.password,
    ));

    let store = Arc::new(SeaOrmStudentStore::new(db));
    let state = ServerState {
        students: Arc::new(StudentService::new(store, addresses)),
    };

    // Build router
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting student records server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
