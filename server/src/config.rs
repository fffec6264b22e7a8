use anyhow::{Context, Result, ensure};
use ::config::{ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use types::{ClientConfig, DEFAULT_API_BASE_URL};
use url::Url;

/// Console host settings.
///
/// Read from an optional `console.toml` in the working directory, then from
/// `CONSOLE_*` environment variables (`CONSOLE_API_BASE_URL`).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base url of the REST backend, as seen from the browser.
    pub api_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let builder = ::config::Config::builder()
            .add_source(File::with_name("console").required(false))
            .add_source(Environment::with_prefix("CONSOLE"));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .build()?
            .try_deserialize()
            .context("invalid console configuration")?;

        let url = Url::parse(&config.api_base_url)
            .with_context(|| format!("api_base_url is not a url: {}", config.api_base_url))?;
        ensure!(
            matches!(url.scheme(), "http" | "https"),
            "api_base_url must be http(s): {url}"
        );

        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.clone(),
        }
    }
}
