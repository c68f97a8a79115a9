//! Core types shared by the conversion pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to an image file plus its format tag.
///
/// Produced once by validation and threaded through the pipeline so later
/// stages don't re-inspect the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Path to the image file
    pub path: String,
    /// Format identifier, `jpeg` unless stated otherwise
    pub format: String,
}

impl ImageMetadata {
    pub fn new(path: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format: format.into(),
        }
    }
}

impl fmt::Display for ImageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// One fully-built external invocation.
///
/// `program` is the executable; `args` starts with the subcommand, followed by
/// the input path, the optional resize pair, and the output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ConversionCommand {
    /// Full argument vector with the program as the first token.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for ConversionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// Exit status and captured streams of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// How the batch counts conversions that ran but failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountingMode {
    /// A conversion succeeds only if the process exits with status 0
    #[default]
    ExitCode,
    /// Every attempted conversion counts as succeeded (legacy behaviour)
    Attempted,
}
