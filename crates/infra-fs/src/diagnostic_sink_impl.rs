// DiagnosticSink adapters
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use probe_core::domain::DiagnosticLine;
use probe_core::port::DiagnosticSink;
use probe_core::Result;

/// Sink writing one line per diagnostic to any `Write`
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> DiagnosticSink for WriterSink<W> {
    fn emit(&self, line: &DiagnosticLine) -> Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Sink writing to process stdout
///
/// Locks stdout per line so lines from concurrent callers do not interleave.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StdoutSink {
    fn emit(&self, line: &DiagnosticLine) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}
