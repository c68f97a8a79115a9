//! Core types and configuration.
//!
//! This module contains the fundamental types used throughout the converter:
//! - [`TaskDescription`]: One requested conversion from the task file
//! - [`ImageMetadata`]: A validated image path plus its format tag
//! - [`ConversionCommand`]: One built external invocation
//! - [`BatchSummary`]: Counters and per-task outcomes for a batch
//! - [`ConverterConfig`]: Settings shared by a run

mod progress;
mod state;
mod task;
mod types;

pub use progress::{BatchSummary, TaskOutcome, TaskState};
pub use state::{ConverterConfig, DEFAULT_EXECUTABLE, DEFAULT_SUBCOMMAND};
pub use task::TaskDescription;
pub use types::{ConversionCommand, CountingMode, ImageMetadata, ProcessOutput};
