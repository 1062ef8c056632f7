// Existence Probe Core - Domain Logic & Ports
// NO filesystem access here; adapters live in probe-infra-fs

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::ProbeConfig;
pub use error::{ProbeError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
