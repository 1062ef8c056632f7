// Existence classification

use std::fmt;
use std::io;

/// Outcome of one existence query against the filesystem
///
/// `Indeterminate` covers permission and I/O failures. Callers of the probe
/// only see the collapsed boolean from [`Existence::is_present`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    Present,
    Absent,
    Indeterminate,
}

impl Existence {
    /// Classify the raw result of a filesystem query
    pub fn from_query(result: &io::Result<bool>) -> Self {
        match result {
            Ok(true) => Existence::Present,
            Ok(false) => Existence::Absent,
            Err(_) => Existence::Indeterminate,
        }
    }

    /// Indeterminate counts as absent
    pub fn is_present(&self) -> bool {
        matches!(self, Existence::Present)
    }
}

impl fmt::Display for Existence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Existence::Present => write!(f, "present"),
            Existence::Absent => write!(f, "absent"),
            Existence::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
