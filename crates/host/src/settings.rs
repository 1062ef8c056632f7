//! Runtime settings for the host
//!
//! Only logging is configurable at runtime. `BUILD_CONFIG` is a build-time
//! value and is never read from here.

use config::{Config, Environment};
use serde::Deserialize;

use probe_core::{ProbeError, Result};

/// Environment prefix: `PROBE_LOG_FORMAT`, `PROBE_LOG_FILTER`
pub const ENV_PREFIX: &str = "PROBE";

const DEFAULT_LOG_FILTER: &str = "probe=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    pub log_format: LogFormat,
    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl HostSettings {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: Environment) -> Result<Self> {
        Config::builder()
            .add_source(env)
            .build()
            .and_then(|config| config.try_deserialize::<HostSettings>())
            .map_err(|e| ProbeError::Config(e.to_string()))
    }
}
