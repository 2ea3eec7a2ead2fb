// src/store/bulk.rs

//! Bulk loading of tasks from a JSON array.

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, TaskrankError};
use crate::task::{validate_task, Task, TaskDraft};

/// Outcome of a bulk load: what was appended and how many entries were
/// dropped. Individual rejection reasons are only logged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkLoadReport {
    pub accepted: Vec<Task>,
    pub rejected_count: usize,
}

/// Validate each candidate on its own, keeping the valid ones in input order.
pub(crate) fn partition_candidates(candidates: Vec<Value>) -> BulkLoadReport {
    let mut report = BulkLoadReport::default();

    for (index, candidate) in candidates.into_iter().enumerate() {
        let outcome = serde_json::from_value::<TaskDraft>(candidate)
            .map_err(|e| e.to_string())
            .and_then(|draft| validate_task(&draft).map_err(|e| e.to_string()));

        match outcome {
            Ok(task) => report.accepted.push(task),
            Err(reason) => {
                report.rejected_count += 1;
                debug!(index, %reason, "dropping invalid bulk-load entry");
            }
        }
    }

    report
}

/// Parse bulk-load text into its array elements.
///
/// Blank text, invalid JSON, or anything but a top-level array is
/// `MalformedInput`.
pub(crate) fn parse_candidates(text: &str) -> Result<Vec<Value>> {
    if text.trim().is_empty() {
        return Err(TaskrankError::MalformedInput(
            "Please enter JSON data".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| TaskrankError::MalformedInput(format!("Invalid JSON format: {e}")))?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(TaskrankError::MalformedInput(
            "Input must be a JSON array".to_string(),
        )),
    }
}
