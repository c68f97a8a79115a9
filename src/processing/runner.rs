//! Executes conversion commands.
//!
//! The process is spawned with a direct argument vector (no shell), awaited to
//! completion, and its exit status and output streams are logged. A failed
//! conversion comes back as a [`ProcessError`]; nothing here panics or exits.

use std::future::Future;
use tokio::process::Command;
use tracing::debug;

use crate::core::{ConversionCommand, ProcessOutput};
use crate::logging::{LogSink, SharedLog};
use crate::utils::ProcessError;

/// Runs one conversion command to completion.
pub trait ConversionRunner {
    fn run(
        &self,
        command: &ConversionCommand,
    ) -> impl Future<Output = Result<ProcessOutput, ProcessError>> + Send;
}

/// Spawns the external executable.
#[derive(Clone)]
pub struct ProcessRunner {
    log: SharedLog,
}

impl ProcessRunner {
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }

    fn report(&self, command: &ConversionCommand, output: &ProcessOutput) {
        let status = match output.exit_code {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        };
        self.log.emit(&format!("[{command} exited with {status}]"));
        if !output.stdout.is_empty() {
            self.log.emit(&format!("[stdout]\n{}", output.stdout));
        }
        if !output.stderr.is_empty() {
            self.log.emit(&format!("[stderr]\n{}", output.stderr));
        }
    }
}

impl ConversionRunner for ProcessRunner {
    async fn run(&self, command: &ConversionCommand) -> Result<ProcessOutput, ProcessError> {
        self.log.emit(&format!("Running Command: {command}"));
        debug!("Spawning {} with {} arguments", command.program, command.args.len());

        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .await
            .map_err(|e| {
                let err = ProcessError::launch(&command.program, e);
                self.log.emit(&format!("Command Error {err}"));
                err
            })?;

        let output = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        self.report(command, &output);

        if output.success() {
            Ok(output)
        } else {
            Err(ProcessError::NonZeroExit(output))
        }
    }
}

/// Logs each command and reports success without spawning anything.
#[derive(Clone)]
pub struct DryRunRunner {
    log: SharedLog,
}

impl DryRunRunner {
    pub fn new(log: SharedLog) -> Self {
        Self { log }
    }
}

impl ConversionRunner for DryRunRunner {
    async fn run(&self, command: &ConversionCommand) -> Result<ProcessOutput, ProcessError> {
        self.log.emit(&format!("Dry run, not executing: {command}"));
        Ok(ProcessOutput {
            exit_code: Some(0),
            ..ProcessOutput::default()
        })
    }
}

/// Runner chosen from [`ConverterConfig::dry_run`](crate::core::ConverterConfig).
#[derive(Clone)]
pub enum ConfiguredRunner {
    Process(ProcessRunner),
    DryRun(DryRunRunner),
}

impl ConfiguredRunner {
    pub fn new(dry_run: bool, log: SharedLog) -> Self {
        if dry_run {
            Self::DryRun(DryRunRunner::new(log))
        } else {
            Self::Process(ProcessRunner::new(log))
        }
    }
}

impl ConversionRunner for ConfiguredRunner {
    async fn run(&self, command: &ConversionCommand) -> Result<ProcessOutput, ProcessError> {
        match self {
            Self::Process(runner) => runner.run(command).await,
            Self::DryRun(runner) => runner.run(command).await,
        }
    }
}
