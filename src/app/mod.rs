//! Application setup and runtime.

use crate::{
  db, http,
  source::{Categorizer, FallbackCategorizer, MailSource, SpoolSource},
};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::info;

/// Shared application state, handed to every handler.
#[derive(Clone)]
pub struct AppState {
  pub db: SqlitePool,
  pub source: Arc<dyn MailSource>,
  pub categorizer: Arc<dyn Categorizer>,
}

impl AppState {
  /// State with no mail source configured and the catch-all categorizer.
  pub fn new(db: SqlitePool) -> Self {
    AppState {
      db,
      source: Arc::new(SpoolSource::empty()),
      categorizer: Arc::new(FallbackCategorizer),
    }
  }

  pub fn with_source(mut self, source: Arc<dyn MailSource>) -> Self {
    self.source = source;
    self
  }

  pub fn with_categorizer(mut self, categorizer: Arc<dyn Categorizer>) -> Self {
    self.categorizer = categorizer;
    self
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("invalid MAILTRACK_ADDR {value:?}: {source}")]
  Addr {
    value: String,
    source: std::net::AddrParseError,
  },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub database_url: String,
  pub addr: SocketAddr,
  pub spool: Option<PathBuf>,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let database_url =
      get("MAILTRACK_DATABASE").unwrap_or_else(|| "sqlite://mailtrack.db".to_string());
    let addr_raw = get("MAILTRACK_ADDR").unwrap_or_else(|| "127.0.0.1:8030".to_string());
    let addr: SocketAddr = addr_raw.parse().map_err(|source| ConfigError::Addr {
      value: addr_raw.clone(),
      source,
    })?;
    let spool = get("MAILTRACK_SPOOL")
      .filter(|s| !s.trim().is_empty())
      .map(PathBuf::from);
    Ok(Config {
      database_url,
      addr,
      spool,
    })
  }
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let config = Config::from_env()?;
  let db_url = db::ensure_sqlite_path(&config.database_url);
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;
  db::run_migrations(&pool).await?;

  match &config.spool {
    Some(dir) => info!("mail spool:           {}", dir.display()),
    None => info!("mail spool:           none (polling records nothing)"),
  }
  let state =
    AppState::new(pool).with_source(Arc::new(SpoolSource::new(config.spool.clone())));

  let app = http::build_router(state);

  info!("poll endpoint:        POST http://{}/poll-emails", config.addr);
  info!("unread endpoint:      POST http://{}/unread-emails", config.addr);
  info!("stats endpoint:       GET  http://{}/stats", config.addr);

  let listener = tokio::net::TcpListener::bind(config.addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}
