//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use image_converter_lib::{
    BatchProcessor, ConversionCommand, ConversionRunner, ConverterConfig, MemorySink,
    ProcessError, ProcessOutput,
};
use tempfile::TempDir;

/// Records every command and reports success without spawning.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    commands: Arc<Mutex<Vec<ConversionCommand>>>,
}

impl RecordingRunner {
    pub fn commands(&self) -> Vec<ConversionCommand> {
        self.commands.lock().unwrap().clone()
    }
}

impl ConversionRunner for RecordingRunner {
    async fn run(&self, command: &ConversionCommand) -> Result<ProcessOutput, ProcessError> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(ProcessOutput {
            exit_code: Some(0),
            ..ProcessOutput::default()
        })
    }
}

pub fn recording_processor(
    config: &ConverterConfig,
) -> (BatchProcessor<RecordingRunner>, RecordingRunner, Arc<MemorySink>) {
    let runner = RecordingRunner::default();
    let sink = Arc::new(MemorySink::new());
    let processor = BatchProcessor::new(runner.clone(), config, sink.clone());
    (processor, runner, sink)
}

/// Creates an empty file named `name` inside `dir`.
pub fn touch(dir: &TempDir, name: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, b"").unwrap();
    path.to_string_lossy().into_owned()
}

/// Writes a task file with the given JSON body.
pub fn task_file(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("tasks.json");
    fs::write(&path, json).unwrap();
    path
}

/// JSON string literal for a path.
pub fn json_path(path: impl AsRef<Path>) -> String {
    serde_json::to_string(&path.as_ref().to_string_lossy()).unwrap()
}
