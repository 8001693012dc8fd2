//! Modgate API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use modgate_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, CatalogStoreConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let pool = match &config.catalog_store {
        CatalogStoreConfig::Postgres { database_url } => {
            Some(api_services::connect_and_migrate(database_url).await?)
        }
        CatalogStoreConfig::Memory => {
            info!("using the in-memory catalog store; changes are lost on restart");
            None
        }
    };

    if config.migrate_only {
        info!("database migrations applied");
        return Ok(());
    }

    let app_state = api_services::build_app_state(pool, &config)?;

    if config.dev_seed {
        dev_seed::run(&app_state.catalog_admin_service).await?;
    }

    let app = api_router::build_router(app_state, &config.frontend_url)?;
    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(
        %address,
        grant_cache_ttl_seconds = config.grant_cache_ttl_seconds,
        "modgate api listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}
