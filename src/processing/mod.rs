//! The conversion pipeline: load tasks, build commands, run them.
//!
//! - [`loader`]: Reads the JSON task file.
//! - [`command`]: Size/format normalization and argument assembly.
//! - [`runner`]: Spawns the external converter.
//! - [`BatchProcessor`]: Drives tasks through validation, command and runner.

pub mod batch;
pub mod command;
pub mod loader;
pub mod runner;

pub use batch::BatchProcessor;
pub use command::{CommandBuilder, SAME_OUTPUT_SIZE, build_command, build_output_filename, normalize_size, requested_format};
pub use loader::load_tasks;
pub use runner::{ConfiguredRunner, ConversionRunner, DryRunRunner, ProcessRunner};
