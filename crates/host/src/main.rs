//! Probe Host - Main Entry Point
//!
//! Prints whether BUILD_CONFIG was compiled in, probes its own executable
//! path, and always exits 0.

mod logging;
mod settings;

use anyhow::Result;
use std::io;
use std::sync::Arc;
use tracing::{info, warn};

use probe_core::application::ProbeHost;
use probe_core::ProbeConfig;
use probe_infra_fs::StdPathQuery;

use crate::settings::HostSettings;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // 1. Load runtime settings (logging only)
    let (settings, settings_error) = match HostSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (HostSettings::default(), Some(e)),
    };

    // 2. Initialize logging
    if let Err(e) = logging::init_logging(&settings) {
        eprintln!("probe-host: logging disabled: {e:#}");
    }
    if let Some(e) = settings_error {
        warn!(error = %e, "Invalid settings, using defaults");
    }

    let config = ProbeConfig::from_build();
    info!(build_config = config.build_config, "Probe host v{} starting", VERSION);

    // 3. Setup dependencies (DI wiring)
    let host = ProbeHost::new(config, Arc::new(StdPathQuery));

    // 4. Flag line + self probe; the report is informational only
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    let report = host.run(&program, &mut io::stdout().lock());

    info!(
        flag_line_written = report.flag_line_written,
        self_probe = %report.self_probe,
        "Probe host finished"
    );

    Ok(())
}
