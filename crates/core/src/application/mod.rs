// Application Layer - Probe services built on the ports

pub mod existence_check;
pub mod host;

// Re-exports
pub use existence_check::ExistenceCheck;
pub use host::{HostReport, ProbeHost};
