//! Converter configuration.

use serde::{Deserialize, Serialize};

use crate::core::CountingMode;

pub const DEFAULT_EXECUTABLE: &str = "magick";
pub const DEFAULT_SUBCOMMAND: &str = "convert";

/// Settings shared by every task in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterConfig {
    /// Conversion executable
    pub executable: String,
    /// First argument passed to the executable
    pub subcommand: String,
    /// How non-zero exits are counted in the summary
    pub counting: CountingMode,
    /// Log commands instead of running them
    pub dry_run: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            subcommand: DEFAULT_SUBCOMMAND.to_string(),
            counting: CountingMode::default(),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_imagemagick() {
        let config = ConverterConfig::default();
        assert_eq!(config.executable, "magick");
        assert_eq!(config.subcommand, "convert");
        assert_eq!(config.counting, CountingMode::ExitCode);
        assert!(!config.dry_run);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{ "counting": "attempted" }"#).unwrap();
        assert_eq!(config.counting, CountingMode::Attempted);
        assert_eq!(config.executable, "magick");
    }
}
