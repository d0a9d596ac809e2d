//! Application setup and runtime.

use crate::{db, http};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use tracing::{error, info};

const DEFAULT_DATABASE: &str = "sqlite://db/isl_logs.db";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
}

/// Runtime configuration. Every field has a default so the service runs
/// with no environment set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub database_url: String,
  pub addr: SocketAddr,
  pub max_connections: u32,
}

impl Config {
  /// Read `SIGNLOG_DATABASE`, `SIGNLOG_ADDR` and `SIGNLOG_MAX_CONNECTIONS`.
  pub fn from_env() -> Result<Self, BoxError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let database_url = lookup("SIGNLOG_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
    let addr: SocketAddr = lookup("SIGNLOG_ADDR")
      .unwrap_or_else(|| DEFAULT_ADDR.to_string())
      .parse::<SocketAddr>()
      .map_err(|e| format!("invalid SIGNLOG_ADDR: {e}"))?;
    let max_connections: u32 = match lookup("SIGNLOG_MAX_CONNECTIONS") {
      Some(v) => v
        .parse::<u32>()
        .map_err(|e| format!("invalid SIGNLOG_MAX_CONNECTIONS: {e}"))?,
      None => DEFAULT_MAX_CONNECTIONS,
    };
    Ok(Config {
      database_url,
      addr,
      max_connections,
    })
  }
}

/// Initialize the store, then serve the ingest endpoint until the process ends.
pub async fn run() -> Result<(), BoxError> {
  crate::util::init_tracing();

  let config = match Config::from_env() {
    Ok(config) => config,
    Err(e) => {
      error!("config error: {e}");
      return Err(e);
    }
  };
  run_with(config).await
}

/// Serve with an explicit configuration. Any startup failure is logged and
/// returned before a request is accepted.
pub async fn run_with(config: Config) -> Result<(), BoxError> {
  // No store means nothing to serve; bail before binding.
  let pool = match db::open_pool(&config.database_url, config.max_connections).await {
    Ok(pool) => pool,
    Err(e) => {
      error!("database init failed ({}): {e}", config.database_url);
      return Err(e.into());
    }
  };
  info!("database initialized: {}", config.database_url);

  let app = http::build_router(AppState { db: pool });

  let listener = match tokio::net::TcpListener::bind(config.addr).await {
    Ok(listener) => listener,
    Err(e) => {
      error!("bind {} failed: {e}", config.addr);
      return Err(e.into());
    }
  };
  info!("ingest endpoint:      POST http://{}/log", config.addr);
  axum::serve(listener, app).await?;
  Ok(())
}
