// Entry point for the image converter CLI.
// The pipeline itself lives in the library crate; this file only wires
// logging, configuration and exit codes.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use image_converter_lib::core::{DEFAULT_EXECUTABLE, DEFAULT_SUBCOMMAND};
use image_converter_lib::{
    BatchProcessor, ConfiguredRunner, ConverterConfig, CountingMode, LogSink, SharedLog, TaskDescription,
    TracingSink, load_tasks,
};

/// Convert images listed in a JSON task file with an external converter
#[derive(Parser, Debug)]
#[command(name = "image-converter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file containing an array of conversion tasks
    #[arg(value_name = "TASKS_FILE")]
    tasks_file: Option<PathBuf>,

    /// Convert one image instead of reading a task file
    #[arg(long, value_name = "PATH", conflicts_with = "tasks_file", requires = "name")]
    input: Option<String>,

    /// Output base name (without extension) for --input
    #[arg(long, value_name = "BASE", requires = "input")]
    name: Option<String>,

    /// Output size for --input, e.g. 50 or 50%
    #[arg(long, requires = "input")]
    size: Option<String>,

    /// Output format for --input, e.g. png
    #[arg(long, requires = "input")]
    format: Option<String>,

    /// Conversion executable
    #[arg(long, env = "IMAGE_CONVERTER_EXECUTABLE", default_value = DEFAULT_EXECUTABLE)]
    executable: String,

    /// Subcommand passed as the executable's first argument
    #[arg(long, env = "IMAGE_CONVERTER_SUBCOMMAND", default_value = DEFAULT_SUBCOMMAND)]
    subcommand: String,

    /// Count every attempted conversion as succeeded, whatever its exit code
    #[arg(long)]
    count_attempted: bool,

    /// Log the commands without running them
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn config(&self) -> ConverterConfig {
        ConverterConfig {
            executable: self.executable.clone(),
            subcommand: self.subcommand.clone(),
            counting: if self.count_attempted {
                CountingMode::Attempted
            } else {
                CountingMode::ExitCode
            },
            dry_run: self.dry_run,
        }
    }

    fn single_task(&self) -> Option<TaskDescription> {
        let (input, name) = (self.input.as_ref()?, self.name.as_ref()?);
        Some(TaskDescription {
            input_image_file: Some(input.clone()),
            output_image_size: self.size.clone(),
            output_image_file_name: name.clone(),
            output_image_format: self.format.clone(),
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    let cli = Cli::parse();
    let config = cli.config();
    debug!("Using {:?}", config);

    let log: SharedLog = Arc::new(TracingSink);
    let runner = ConfiguredRunner::new(config.dry_run, log.clone());
    let processor = BatchProcessor::new(runner, &config, log.clone());

    if let Some(task) = cli.single_task() {
        let outcome = processor.process_single(&task).await;
        return Ok(if outcome.succeeded(config.counting) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let Some(tasks_file) = cli.tasks_file.as_deref() else {
        log.emit("Data argument file is missing");
        return Ok(ExitCode::FAILURE);
    };

    // Nothing can run without the task list.
    let tasks = match load_tasks(tasks_file, &*log).await {
        Ok(tasks) => tasks,
        Err(e) => {
            debug!("Task file load failed: {e:?}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let summary = processor.process_batch(&tasks).await;
    debug!(
        "{}% of {} tasks succeeded",
        summary.success_percentage(),
        summary.total()
    );
    Ok(ExitCode::SUCCESS)
}
