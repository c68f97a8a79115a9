use tracing::{debug, warn};

use crate::core::{BatchSummary, ConverterConfig, CountingMode, TaskDescription, TaskOutcome, TaskState};
use crate::logging::{LogSink, SharedLog};
use crate::processing::command::{CommandBuilder, build_output_filename, normalize_size, requested_format};
use crate::processing::runner::ConversionRunner;
use crate::utils::{ImageFormat, validate_input_path};

/// Runs tasks one after another: validate, build the command, run it.
///
/// Each conversion is awaited before the next task starts. Per-task failures
/// are recorded in the summary and never abort the batch.
pub struct BatchProcessor<R> {
    runner: R,
    builder: CommandBuilder,
    counting: CountingMode,
    log: SharedLog,
}

impl<R: ConversionRunner> BatchProcessor<R> {
    pub fn new(runner: R, config: &ConverterConfig, log: SharedLog) -> Self {
        debug!(
            "Creating BatchProcessor for {} {} ({:?} counting)",
            config.executable, config.subcommand, config.counting
        );
        Self {
            runner,
            builder: CommandBuilder::from_config(config),
            counting: config.counting,
            log,
        }
    }

    /// Processes `tasks` in order and logs a summary line.
    pub async fn process_batch(&self, tasks: &[TaskDescription]) -> BatchSummary {
        self.log.emit(&format!("Converting {} images", tasks.len()));

        let mut summary = BatchSummary::default();
        for task in tasks {
            let outcome = self.process_single(task).await;
            summary.record(outcome, self.counting);
        }

        self.log.emit(&format!(
            "Image conversion completed. {} images converted. {} images failed",
            summary.succeeded, summary.failed
        ));
        if summary.failed > 0 {
            warn!(
                "Batch finished with {} failed tasks out of {}",
                summary.failed,
                summary.total()
            );
        }
        summary
    }

    /// Processes one task through validation, command building and the runner.
    pub async fn process_single(&self, task: &TaskDescription) -> TaskOutcome {
        let input_path = task.input_display().to_string();

        let source = match validate_input_path(task.input_image_file.as_deref()) {
            Ok(source) => source,
            Err(e) => {
                self.log
                    .emit(&format!("File {input_path} not valid or does not exist"));
                debug!("Rejected {input_path:?}: {e}");
                return TaskOutcome {
                    input_path,
                    output_path: None,
                    state: TaskState::Rejected(e.to_string()),
                };
            }
        };

        let size = normalize_size(task.output_image_size.as_deref());
        let format = task.output_image_format.as_deref();
        if let Some(Err(e)) = requested_format(format).map(str::parse::<ImageFormat>) {
            warn!("{e}; passing it to the converter as-is");
        }
        let output = build_output_filename(&task.output_image_file_name, format);

        self.log
            .emit(&format!("Converting {source} to {output} at scale {size}"));
        let command = self.builder.build(&source.path, &size, &output);

        let state = match self.runner.run(&command).await {
            Ok(_) => {
                self.log
                    .emit(&format!("{source} Converted to {output} at scale {size}"));
                TaskState::Converted
            }
            Err(e) => {
                self.log
                    .emit(&format!("Failed to convert {source} to {output}"));
                TaskState::ConversionFailed(e.to_string())
            }
        };

        TaskOutcome {
            input_path,
            output_path: Some(output),
            state,
        }
    }
}
