// Domain Layer - Pure probe values

pub mod diagnostic;
pub mod existence;

// Re-exports
pub use diagnostic::DiagnosticLine;
pub use existence::Existence;
