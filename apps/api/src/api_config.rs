use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use modgate_core::AppError;
use tracing_subscriber::EnvFilter;

/// Backing store for the role catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStoreConfig {
    Postgres { database_url: String },
    Memory,
}

/// Backend used for the optional per-user grant cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantCacheBackend {
    InMemory,
    Redis,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub catalog_store: CatalogStoreConfig,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub grant_cache_backend: GrantCacheBackend,
    pub grant_cache_ttl_seconds: u32,
    pub redis_url: Option<String>,
    pub dev_seed: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");

        let catalog_store = match env::var("CATALOG_STORE")
            .unwrap_or_else(|_| "postgres".to_owned())
            .as_str()
        {
            "postgres" => CatalogStoreConfig::Postgres {
                database_url: required_non_empty_env("DATABASE_URL")?,
            },
            "memory" => CatalogStoreConfig::Memory,
            other => {
                return Err(AppError::Validation(format!(
                    "CATALOG_STORE must be either 'postgres' or 'memory', got '{other}'"
                )));
            }
        };

        if migrate_only && catalog_store == CatalogStoreConfig::Memory {
            return Err(AppError::Validation(
                "the migrate command requires CATALOG_STORE=postgres".to_owned(),
            ));
        }

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let grant_cache_backend = match env::var("AUTHZ_GRANT_CACHE_BACKEND")
            .unwrap_or_else(|_| "in_memory".to_owned())
            .as_str()
        {
            "in_memory" => GrantCacheBackend::InMemory,
            "redis" => GrantCacheBackend::Redis,
            other => {
                return Err(AppError::Validation(format!(
                    "AUTHZ_GRANT_CACHE_BACKEND must be either 'in_memory' or 'redis', got '{other}'"
                )));
            }
        };
        let grant_cache_ttl_seconds = match env::var("AUTHZ_GRANT_CACHE_TTL_SECONDS") {
            Ok(value) if !value.trim().is_empty() => {
                value.trim().parse::<u32>().map_err(|error| {
                    AppError::Validation(format!("invalid AUTHZ_GRANT_CACHE_TTL_SECONDS: {error}"))
                })?
            }
            _ => 0,
        };

        let redis_url = env::var("REDIS_URL")
            .ok()
            .filter(|value| !value.trim().is_empty());
        let dev_seed = env::var("DEV_SEED")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            migrate_only,
            catalog_store,
            frontend_url,
            api_host,
            api_port,
            grant_cache_backend,
            grant_cache_ttl_seconds,
            redis_url,
            dev_seed,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }

    /// Returns whether the grant cache is consulted at all.
    pub fn grant_cache_enabled(&self) -> bool {
        self.grant_cache_ttl_seconds > 0
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = required_env(name)?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}
