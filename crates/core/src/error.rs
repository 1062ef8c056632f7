// Central Error Type for the probe crates

use thiserror::Error;

/// Probe-level error type
///
/// None of these ever reach a `file_exists` caller; the probe collapses them
/// into a boolean. They exist for the ports and for the host wiring.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;
