// Module declarations in dependency order
pub mod core;
pub mod logging;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    BatchSummary, ConversionCommand, ConverterConfig, CountingMode, ImageMetadata, ProcessOutput,
    TaskDescription, TaskOutcome, TaskState,
};
pub use crate::logging::{LogSink, MemorySink, SharedLog, TracingSink};
pub use crate::processing::{
    BatchProcessor, CommandBuilder, ConfiguredRunner, ConversionRunner, DryRunRunner,
    ProcessRunner, build_command, build_output_filename, load_tasks, normalize_size,
};
pub use crate::utils::{LoadError, ProcessError, ValidationError, is_valid};

// The binary entry point lives in main.rs.
