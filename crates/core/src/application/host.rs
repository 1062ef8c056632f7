// ProbeHost - startup sequence of the host executable
//
// Start -> EmitFlagLine -> ProbeSelf -> Exit(0)
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::application::existence_check::classify;
use crate::config::ProbeConfig;
use crate::domain::Existence;
use crate::port::PathQuery;

/// What a host run did (the self-probe result is informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostReport {
    pub flag_line_written: bool,
    pub self_probe: Existence,
}

pub struct ProbeHost {
    config: ProbeConfig,
    query: Arc<dyn PathQuery>,
}

impl ProbeHost {
    pub fn new(config: ProbeConfig, query: Arc<dyn PathQuery>) -> Self {
        Self { config, query }
    }

    /// Print the flag line to `out`, then probe `program` (argument zero)
    ///
    /// Neither step can fail the run; a write error is logged and recorded in
    /// the report.
    pub fn run(&self, program: &str, out: &mut dyn Write) -> HostReport {
        let flag_line = self.config.flag_line();
        let flag_line_written = match writeln!(out, "{flag_line}").and_then(|_| out.flush()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to write flag line");
                false
            }
        };

        // Exercises the platform filesystem API; the answer is not used
        let self_probe = classify(self.query.as_ref(), program);
        debug!(program = %program, self_probe = %self_probe, "Self probe completed");

        HostReport {
            flag_line_written,
            self_probe,
        }
    }
}
