//! HTTP server wiring for the joiners service.
//!
//! Owns the runtime configuration and assembles the top-level axum
//! [`Router`]: the JSON API from `joiners-api`, nested under a configurable
//! prefix, with request tracing.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use joiners_core::store::JoinerStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered with
/// `JOINERS_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file. A leading `~/` is expanded.
  pub store_path: PathBuf,
  /// Path the API is mounted under; empty or `/` mounts at the root.
  pub api_prefix: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       3000,
      store_path: PathBuf::from("joiners.db"),
      api_prefix: "/v1".to_string(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level router for `store`.
pub fn router<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: JoinerStore + 'static,
{
  let api = joiners_api::api_router(store);
  let prefix = config.api_prefix.trim_end_matches('/');

  let app = if prefix.is_empty() {
    Router::new().merge(api)
  } else if prefix.starts_with('/') {
    Router::new().nest(prefix, api)
  } else {
    Router::new().nest(&format!("/{prefix}"), api)
  };

  app.layer(TraceLayer::new_for_http())
}
