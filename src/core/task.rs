//! Conversion task definition.

use serde::{Deserialize, Serialize};

/// One requested conversion, as read from the task file.
///
/// Field names follow the task file's camelCase keys. Only
/// `outputImageFileName` must be present; a missing input path is left for
/// validation to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescription {
    /// Path to the source image
    #[serde(default)]
    pub input_image_file: Option<String>,
    /// Target size as a percentage, e.g. `"50%"` or `"50"`
    #[serde(default)]
    pub output_image_size: Option<String>,
    /// Base name of the output file, without extension
    pub output_image_file_name: String,
    /// Target format, e.g. `"png"`
    #[serde(default)]
    pub output_image_format: Option<String>,
}

impl TaskDescription {
    pub fn new(input: impl Into<String>, output_name: impl Into<String>) -> Self {
        Self {
            input_image_file: Some(input.into()),
            output_image_size: None,
            output_image_file_name: output_name.into(),
            output_image_format: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.output_image_size = Some(size.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.output_image_format = Some(format.into());
        self
    }

    /// Input path for logging; empty when the task has none.
    pub fn input_display(&self) -> &str {
        self.input_image_file.as_deref().unwrap_or_default()
    }
}
