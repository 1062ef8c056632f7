// Raw filesystem existence query port
use std::io;

/// Platform existence query
///
/// Adapters report errors as-is; the policy that turns them into `false`
/// lives in the application layer.
pub trait PathQuery: Send + Sync {
    /// `Ok(true)` if an entry exists at `path`, `Ok(false)` if it definitely
    /// does not, `Err` if existence cannot be determined.
    fn try_exists(&self, path: &str) -> io::Result<bool>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock PathQuery with scripted answers
    ///
    /// Unknown paths are reported as absent.
    pub struct MockPathQuery {
        answers: Mutex<HashMap<String, Result<bool, io::ErrorKind>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPathQuery {
        pub fn new() -> Self {
            Self {
                answers: Mutex::new(HashMap::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_present(self, path: &str) -> Self {
            self.answers.lock().unwrap().insert(path.to_string(), Ok(true));
            self
        }

        pub fn with_error(self, path: &str, kind: io::ErrorKind) -> Self {
            self.answers.lock().unwrap().insert(path.to_string(), Err(kind));
            self
        }

        /// Paths queried so far, in order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPathQuery {
        fn default() -> Self {
            Self::new()
        }
    }

    impl PathQuery for MockPathQuery {
        fn try_exists(&self, path: &str) -> io::Result<bool> {
            self.calls.lock().unwrap().push(path.to_string());
            match self.answers.lock().unwrap().get(path) {
                Some(Ok(exists)) => Ok(*exists),
                Some(Err(kind)) => Err(io::Error::from(*kind)),
                None => Ok(false),
            }
        }
    }
}
