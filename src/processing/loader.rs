//! Reads the JSON task file.

use std::path::Path;
use tracing::debug;

use crate::core::TaskDescription;
use crate::logging::LogSink;
use crate::utils::LoadError;

/// Loads the task list from `path`, preserving file order.
///
/// Every failure is returned as a [`LoadError`] after being logged; the
/// caller decides whether a failed load ends the process.
pub async fn load_tasks(
    path: impl AsRef<Path>,
    log: &dyn LogSink,
) -> Result<Vec<TaskDescription>, LoadError> {
    let path = path.as_ref();
    log.emit(&format!("Loading data from {}", path.display()));

    match read_tasks(path).await {
        Ok(tasks) => {
            log.emit(&format!("Loaded data from {}", path.display()));
            debug!("Parsed {} tasks from {}", tasks.len(), path.display());
            Ok(tasks)
        }
        Err(e) => {
            log.emit(&e.to_string());
            log.emit(&format!("Failed to load data from {}. Exiting", path.display()));
            Err(e)
        }
    }
}

async fn read_tasks(path: &Path) -> Result<Vec<TaskDescription>, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::from_io(path, e))?;

    parse_tasks(path, &content)
}

/// Parses task file content; `path` is only used in error messages.
pub fn parse_tasks(path: &Path, content: &str) -> Result<Vec<TaskDescription>, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| LoadError::parse(path, e))?;

    if !value.is_array() {
        return Err(LoadError::NotAnArray(path.to_path_buf()));
    }

    serde_json::from_value(value).map_err(|e| LoadError::parse(path, e))
}
