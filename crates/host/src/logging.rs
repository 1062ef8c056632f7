//! Tracing subscriber setup
//!
//! Logs go to stderr; stdout is reserved for the flag line and probe output.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::{HostSettings, LogFormat};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `PROBE_LOG_FILTER`.
pub fn init_logging(settings: &HostSettings) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("Failed to create env filter")?;

    match settings.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install JSON subscriber")?;
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install pretty subscriber")?;
        }
    }

    Ok(())
}
