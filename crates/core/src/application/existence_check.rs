// Existence check service: query policy + diagnostic trace
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::domain::{DiagnosticLine, Existence};
use crate::port::{DiagnosticSink, ExistenceProbe, PathQuery};

/// The library's `ExistenceProbe`
///
/// Asks the [`PathQuery`] once per call, collapses indeterminate answers to
/// `false`, then writes exactly one [`DiagnosticLine`] to the sink.
pub struct ExistenceCheck {
    config: ProbeConfig,
    query: Arc<dyn PathQuery>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ExistenceCheck {
    pub fn new(
        config: ProbeConfig,
        query: Arc<dyn PathQuery>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            config,
            query,
            sink,
        }
    }

    pub fn config(&self) -> ProbeConfig {
        self.config
    }

    /// Classify `path` without emitting a diagnostic line
    pub fn classify(&self, path: &str) -> Existence {
        classify(self.query.as_ref(), path)
    }
}

/// Run one query and log the outcome
pub(crate) fn classify(query: &dyn PathQuery, path: &str) -> Existence {
    let result = query.try_exists(path);
    let existence = Existence::from_query(&result);

    match &result {
        Err(e) => warn!(
            path = %path,
            error = %e,
            "Existence could not be determined, reporting absent"
        ),
        Ok(_) => debug!(path = %path, existence = %existence, "Existence checked"),
    }

    existence
}

impl ExistenceProbe for ExistenceCheck {
    fn file_exists(&self, path: &str) -> bool {
        let exists = self.classify(path).is_present();

        let line = DiagnosticLine::new(self.config.build_config, exists);
        if let Err(e) = self.sink.emit(&line) {
            debug!(error = %e, "Diagnostic line dropped");
        }

        exists
    }
}
