mod config;

use std::sync::OnceLock;

use axum::{Router, routing::get};
use tracing_subscriber::EnvFilter;
use types::ClientConfig;

pub use crate::config::Config;

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Dioxus may already have installed its own subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration and build the host's own routes.
pub fn init() -> anyhow::Result<Router> {
    let config = Config::load()?;
    tracing::info!(api_base_url = %config.api_base_url, "console configured");

    if CONFIG.set(config).is_err() {
        tracing::debug!("configuration already loaded, keeping the first one");
    }

    Ok(Router::new().route("/healthz", get(healthz)))
}

/// Settings handed to the browser; the defaults until `init` has run.
pub fn client_config() -> ClientConfig {
    CONFIG
        .get()
        .map(Config::client_config)
        .unwrap_or_default()
}

async fn healthz() -> &'static str {
    "ok"
}
