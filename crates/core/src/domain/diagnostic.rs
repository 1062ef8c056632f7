// Diagnostic line emitted by the probe after every check

use std::fmt;

/// One human-readable trace line: flag state plus the boolean result
///
/// Renders as `BUILD_CONFIG set; file_exists=yes` or
/// `BUILD_CONFIG unset; file_exists=no`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticLine {
    pub build_config: bool,
    pub exists: bool,
}

impl DiagnosticLine {
    pub fn new(build_config: bool, exists: bool) -> Self {
        Self {
            build_config,
            exists,
        }
    }
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.build_config { "set" } else { "unset" };
        let exists = if self.exists { "yes" } else { "no" };
        write!(f, "BUILD_CONFIG {flag}; file_exists={exists}")
    }
}
