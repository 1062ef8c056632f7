// Diagnostic stream port
use crate::domain::DiagnosticLine;
use crate::error::Result;

/// Destination for probe diagnostic lines (stdout in production)
pub trait DiagnosticSink: Send + Sync {
    /// Write one line. Errors are reported but never change a probe result.
    fn emit(&self, line: &DiagnosticLine) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::ProbeError;
    use std::sync::Mutex;

    /// Sink that keeps rendered lines in memory
    pub struct RecordingSink {
        lines: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self {
                lines: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        /// Sink whose every write fails
        pub fn failing() -> Self {
            Self {
                lines: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Default for RecordingSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn emit(&self, line: &DiagnosticLine) -> Result<()> {
            if self.fail {
                return Err(ProbeError::Io(std::io::Error::from(
                    std::io::ErrorKind::BrokenPipe,
                )));
            }
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }
}
