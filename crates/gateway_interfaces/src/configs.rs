//! Configuration of the gateway crates.

use std::path::PathBuf;

use router_env::{config::Log, env};
use serde::Deserialize;

use crate::{consts, types::Proxy};

/// Connector endpoint settings.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConnectorParams {
    /// base url
    pub base_url: String,
}

/// Endpoints of every supported connector.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Connectors {
    #[allow(missing_docs)]
    pub paystation: ConnectorParams,
}

/// Application settings.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    #[allow(missing_docs)]
    pub log: Log,
    #[allow(missing_docs)]
    pub proxy: Proxy,
    #[allow(missing_docs)]
    pub connectors: Connectors,
    /// Seconds to wait for a connector before giving up on a request.
    pub request_timeout: Option<u64>,
}

impl Settings {
    /// Load the settings of the current environment.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::with_config_path(None)
    }

    /// Load settings from `config_path`, or from `config/<env>.toml` under the workspace root.
    /// `GATEWAY__`-prefixed environment variables override file values
    /// (`GATEWAY__CONNECTORS__PAYSTATION__BASE_URL`).
    #[allow(clippy::print_stderr)]
    pub fn with_config_path(config_path: Option<PathBuf>) -> Result<Self, config::ConfigError> {
        let environment = env::which();
        let config_path = router_env::Config::config_path(environment, config_path);

        let config = router_env::Config::builder(environment)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::CONFIG_ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        let settings: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            config::ConfigError::Message(error.to_string())
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no connector call could succeed with.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.connectors.paystation.base_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "connectors.paystation.base_url must not be empty".into(),
            ));
        }

        if self.request_timeout == Some(0) {
            return Err(config::ConfigError::Message(
                "request_timeout must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
