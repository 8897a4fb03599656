//! Township HTTP server: configuration loading and application assembly.
//!
//! The binary in `main.rs` is a thin shell over [`load_config`] and [`app`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use township_core::store::TownStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Layered lowest to highest: built-in defaults, the TOML file, then
/// `TOWNSHIP_*` environment variables (e.g. `TOWNSHIP_PORT=9000`).
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Load configuration from `path` (optional) and the process environment.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  build_config(path, config::Environment::with_prefix("TOWNSHIP"))
}

fn build_config(
  path: &Path,
  env:  config::Environment,
) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080_i64)?
    .set_default("store_path", "township.db")?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(env)
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The full HTTP application: API routes wrapped in request tracing.
pub fn app<S: TownStore>(store: Arc<S>) -> Router {
  township_api::api_router(store).layer(TraceLayer::new_for_http())
}
