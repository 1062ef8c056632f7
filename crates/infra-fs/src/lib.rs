// Existence Probe Infrastructure - Filesystem Adapters
// Implements: PathQuery, DiagnosticSink

pub mod diagnostic_sink_impl;
pub mod path_query_impl;

pub use diagnostic_sink_impl::{StdoutSink, WriterSink};
pub use path_query_impl::{path_exists, StdPathQuery};

use std::sync::Arc;

use probe_core::application::ExistenceCheck;
use probe_core::ProbeConfig;

/// Production probe: std filesystem query, diagnostics on stdout
pub fn std_existence_probe(config: ProbeConfig) -> ExistenceCheck {
    ExistenceCheck::new(config, Arc::new(StdPathQuery), Arc::new(StdoutSink::new()))
}
