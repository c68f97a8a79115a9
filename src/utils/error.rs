//! Error types for the image converter.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::ProcessOutput;

/// Errors raised while reading the task file.
///
/// All of these are fatal for a batch run: no tasks can be derived without
/// the file, so the caller decides whether to terminate.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Task file does not exist
    #[error("Task file not found: {0}")]
    NotFound(PathBuf),
    /// Task file exists but cannot be opened
    #[error("Permission denied reading task file: {0}")]
    PermissionDenied(PathBuf),
    /// Any other IO failure while reading
    #[error("IO error reading {path}: {message}")]
    Io { path: PathBuf, message: String },
    /// File content is not valid task JSON
    #[error("Malformed task file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// Valid JSON, but the top-level value is not an array
    #[error("Task file {0} must contain a top-level JSON array")]
    NotAnArray(PathBuf),
}

/// Validation errors for a task's input image.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// No input path given
    #[error("Input path is empty")]
    EmptyPath,
    /// Path does not end in an accepted image extension
    #[error("Unsupported input extension: {0}")]
    UnsupportedExtension(PathBuf),
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
}

/// File path errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Failures of one external conversion invocation.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The process could not be started or its output could not be collected
    #[error("Failed to launch {program}: {message}")]
    Launch { program: String, message: String },
    /// The process ran and reported failure
    #[error("Process {}", describe_exit(.0.exit_code))]
    NonZeroExit(ProcessOutput),
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// A format name that maps to no known image format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported image format: {0}")]
pub struct UnknownFormat(pub String);

impl LoadError {
    /// Classifies an IO failure for `path` by its kind.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io {
                path,
                message: err.to_string(),
            },
        }
    }

    pub fn parse(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn unsupported_extension(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedExtension(path.into())
    }
}

impl ProcessError {
    pub fn launch(program: impl Into<String>, err: impl ToString) -> Self {
        Self::Launch {
            program: program.into(),
            message: err.to_string(),
        }
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}
