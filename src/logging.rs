//! Line-oriented log sinks.
//!
//! Pipeline components write their user-visible lines through a [`LogSink`]
//! handed to them at construction, never through a global logger.

use std::sync::{Arc, Mutex};

/// Destination for one line of output.
pub trait LogSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Sink shared between pipeline components.
pub type SharedLog = Arc<dyn LogSink>;

/// Forwards every line to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!("{line}");
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}
