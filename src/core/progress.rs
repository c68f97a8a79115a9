use serde::Serialize;

use crate::core::CountingMode;

/// Terminal state of one task.
///
/// A task moves `Loaded -> Validated | Rejected`, and a validated task ends in
/// `Converted` or `ConversionFailed`. There are no retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "reason")]
pub enum TaskState {
    /// Input failed validation; no process was started
    Rejected(String),
    /// The external process exited successfully
    Converted,
    /// The process could not be launched or exited non-zero
    ConversionFailed(String),
}

/// Outcome of one task in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutcome {
    pub input_path: String,
    /// Output file name, set once the task got past validation
    pub output_path: Option<String>,
    pub state: TaskState,
}

impl TaskOutcome {
    /// Whether this outcome counts as a success under `mode`.
    pub fn succeeded(&self, mode: CountingMode) -> bool {
        match (&self.state, mode) {
            (TaskState::Converted, _) => true,
            (TaskState::ConversionFailed(_), CountingMode::Attempted) => true,
            _ => false,
        }
    }
}

/// Running counters and per-task outcomes for a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Outcomes in task file order
    pub outcomes: Vec<TaskOutcome>,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: TaskOutcome, mode: CountingMode) {
        if outcome.succeeded(mode) {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Share of tasks counted as succeeded (0-100)
    pub fn success_percentage(&self) -> usize {
        if self.total() > 0 {
            (self.succeeded * 100) / self.total()
        } else {
            0
        }
    }
}
