use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::repository::RepositoryBackend;

pub const DEFAULT_PREDICTOR_URL: &str = "http://localhost:5001/predict";

/// Configuration for the prediction gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Endpoint of the external sentiment predictor
    #[serde(default = "default_predictor_url")]
    pub predictor_url: String,
    /// Timeout for a single predictor call (milliseconds)
    #[serde(default = "default_predictor_timeout_ms")]
    pub predictor_timeout_ms: u64,
    /// Backend holding prediction records
    #[serde(default)]
    pub store: RepositoryBackend,
}

fn default_predictor_url() -> String {
    DEFAULT_PREDICTOR_URL.to_string()
}
fn default_predictor_timeout_ms() -> u64 {
    5000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            predictor_url: default_predictor_url(),
            predictor_timeout_ms: default_predictor_timeout_ms(),
            store: RepositoryBackend::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `SENTIMENT_*` keys. Only an unknown store backend
    /// is an error; an unparseable timeout keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("SENTIMENT_STORE") {
            Some(value) => value
                .parse::<RepositoryBackend>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SENTIMENT_STORE",
                    reason,
                })?,
            None => RepositoryBackend::default(),
        };

        Ok(Self {
            predictor_url: lookup("SENTIMENT_PREDICTOR_URL")
                .unwrap_or_else(default_predictor_url),
            predictor_timeout_ms: lookup("SENTIMENT_PREDICTOR_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_predictor_timeout_ms),
            store,
        })
    }

    pub fn predictor_timeout(&self) -> Duration {
        Duration::from_millis(self.predictor_timeout_ms)
    }
}
