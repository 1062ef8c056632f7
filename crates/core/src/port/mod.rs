// Port Layer - Interfaces for external dependencies

pub mod diagnostic_sink;
pub mod existence_probe;
pub mod path_query;

// Re-exports
pub use diagnostic_sink::DiagnosticSink;
pub use existence_probe::ExistenceProbe;
pub use path_query::PathQuery;
