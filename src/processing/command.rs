//! Turns a task's size, name and format into an external command line.
//!
//! Everything here is pure: no filesystem access and no process spawning, so
//! size and format edge cases are testable on their own.

use crate::core::{ConversionCommand, ConverterConfig, DEFAULT_EXECUTABLE, DEFAULT_SUBCOMMAND};
use crate::utils::DEFAULT_OUTPUT_FORMAT;

/// Normalized size meaning "keep the original dimensions".
pub const SAME_OUTPUT_SIZE: &str = "100%";

/// Flag that introduces the resize percentage.
pub const RESIZE_FLAG: &str = "-resize";

/// Normalizes a requested size to a percentage string.
///
/// Absent or empty input, a non-integer value, or anything above 100 yields
/// [`SAME_OUTPUT_SIZE`]. A single trailing `%` is optional on input and
/// always present on output.
pub fn normalize_size(input: Option<&str>) -> String {
    let size = input.map(str::trim).unwrap_or_default();
    if size.is_empty() {
        return SAME_OUTPUT_SIZE.to_string();
    }

    let number = size.strip_suffix('%').unwrap_or(size);
    match number.parse::<i64>() {
        Ok(percent) if percent <= 100 => format!("{percent}%"),
        _ => SAME_OUTPUT_SIZE.to_string(),
    }
}

/// Appends the lowercased format as the only extension of `base`.
///
/// An absent or empty format falls back to [`DEFAULT_OUTPUT_FORMAT`].
pub fn build_output_filename(base: &str, format: Option<&str>) -> String {
    let format = requested_format(format).unwrap_or(DEFAULT_OUTPUT_FORMAT);
    format!("{base}.{}", format.to_lowercase())
}

/// The format a task asked for, without whitespace or a leading `.`.
///
/// `None` when the task names no format.
pub fn requested_format(format: Option<&str>) -> Option<&str> {
    format
        .map(|f| f.trim().trim_start_matches('.'))
        .filter(|f| !f.is_empty())
}

/// Builds conversion commands for a fixed executable and subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    executable: String,
    subcommand: String,
}

impl CommandBuilder {
    pub fn new(executable: impl Into<String>, subcommand: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            subcommand: subcommand.into(),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.executable.clone(), config.subcommand.clone())
    }

    /// `<executable> <subcommand> <input> [-resize <size>] <output>`
    ///
    /// The resize pair is left out when `normalized_size` is the sentinel.
    pub fn build(
        &self,
        input_path: &str,
        normalized_size: &str,
        output_filename: &str,
    ) -> ConversionCommand {
        let mut args = vec![self.subcommand.clone(), input_path.to_string()];
        if normalized_size != SAME_OUTPUT_SIZE {
            args.push(RESIZE_FLAG.to_string());
            args.push(normalized_size.to_string());
        }
        args.push(output_filename.to_string());

        ConversionCommand {
            program: self.executable.clone(),
            args,
        }
    }
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE, DEFAULT_SUBCOMMAND)
    }
}

/// Builds a command for the default `magick convert` executable.
pub fn build_command(
    input_path: &str,
    normalized_size: &str,
    output_filename: &str,
) -> ConversionCommand {
    CommandBuilder::default().build(input_path, normalized_size, output_filename)
}
