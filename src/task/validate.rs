// src/task/validate.rs

use chrono::NaiveDate;
use thiserror::Error;

use crate::task::model::{Position, Task, TaskDraft};

/// Smallest accepted effort estimate, in hours.
pub const MIN_ESTIMATED_HOURS: f64 = 0.5;

pub const MIN_IMPORTANCE: f64 = 1.0;
pub const MAX_IMPORTANCE: f64 = 10.0;

/// Every problem found on a single task, reported together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fix the following errors: {}", .problems.join(", "))]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    pub fn new(problems: Vec<String>) -> Self {
        Self { problems }
    }

    pub fn single(problem: impl Into<String>) -> Self {
        Self {
            problems: vec![problem.into()],
        }
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

/// Check a draft and build the validated [`Task`].
///
/// Pure: the same draft always yields the same task or the same list of
/// problems.
pub fn validate_task(draft: &TaskDraft) -> Result<Task, ValidationError> {
    let mut problems: Vec<String> = Vec::new();

    let title = match draft.title.as_deref() {
        Some(t) if !t.trim().is_empty() => Some(t.to_string()),
        _ => {
            problems.push("Title is required".to_string());
            None
        }
    };

    let due_date = match draft.due_date.as_deref().map(str::trim) {
        None | Some("") => {
            problems.push("Due date is required".to_string());
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                problems.push(format!("Due date '{raw}' is not a valid YYYY-MM-DD date"));
                None
            }
        },
    };

    let estimated_hours = match draft.estimated_hours {
        Some(h) if h.is_finite() && h >= MIN_ESTIMATED_HOURS => Some(h),
        _ => {
            problems.push("Estimated hours must be at least 0.5".to_string());
            None
        }
    };

    let importance = match draft.importance {
        Some(i) if i.fract() == 0.0 && (MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&i) => {
            Some(i as u8)
        }
        _ => {
            problems.push("Importance must be between 1 and 10".to_string());
            None
        }
    };

    let dependencies = match draft.dependencies.as_deref() {
        None => Some(Vec::new()),
        Some(deps) => {
            let positions: Option<Vec<Position>> = deps
                .iter()
                .map(|&d| usize::try_from(d).ok().filter(|&p| p >= 1))
                .collect();
            if positions.is_none() {
                problems.push("Dependencies must be positive task numbers".to_string());
            }
            positions
        }
    };

    match (title, due_date, estimated_hours, importance, dependencies) {
        (
            Some(title),
            Some(due_date),
            Some(estimated_hours),
            Some(importance),
            Some(dependencies),
        ) => Ok(Task {
            title,
            due_date,
            estimated_hours,
            importance,
            dependencies,
        }),
        _ => Err(ValidationError::new(problems)),
    }
}

impl TryFrom<TaskDraft> for Task {
    type Error = ValidationError;

    fn try_from(draft: TaskDraft) -> Result<Self, Self::Error> {
        validate_task(&draft)
    }
}

impl TryFrom<&TaskDraft> for Task {
    type Error = ValidationError;

    fn try_from(draft: &TaskDraft) -> Result<Self, Self::Error> {
        validate_task(draft)
    }
}
