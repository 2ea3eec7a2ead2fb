#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use taskrank::task::{CompletedTask, Position, Task, TaskDraft};

/// Builder for valid `Task`s with sensible defaults.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: Task {
                title: title.to_string(),
                due_date: NaiveDate::from_ymd_opt(2025, 11, 28).expect("valid date"),
                estimated_hours: 2.0,
                importance: 5,
                dependencies: vec![],
            },
        }
    }

    pub fn due(mut self, date: &str) -> Self {
        self.task.due_date =
            NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date must be YYYY-MM-DD");
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn importance(mut self, importance: u8) -> Self {
        self.task.importance = importance;
        self
    }

    pub fn depends_on(mut self, position: Position) -> Self {
        self.task.dependencies.push(position);
        self
    }

    pub fn dependencies(mut self, positions: &[Position]) -> Self {
        self.task.dependencies = positions.to_vec();
        self
    }

    pub fn build(self) -> Task {
        self.task
    }

    pub fn draft(self) -> TaskDraft {
        TaskDraft::from(self.task)
    }

    pub fn json(self) -> Value {
        serde_json::to_value(&self.task).expect("task serializes")
    }
}

/// A completed entry with a fixed timestamp, for snapshot tests.
pub fn completed(title: &str, order: usize) -> CompletedTask {
    CompletedTask {
        task: TaskBuilder::new(title).build(),
        completed_at: fixed_time(order as u32),
        completed_order: order,
    }
}

/// 2025-11-27 09:00:00 UTC plus `minutes`.
pub fn fixed_time(minutes: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 27, 9, 0, 0).single().expect("valid time")
        + chrono::Duration::minutes(i64::from(minutes))
}

/// The four demonstration tasks offered in the bulk-load box.
pub fn sample_tasks_json() -> Value {
    json!([
        {
            "title": "Fix critical login bug",
            "due_date": "2025-11-26",
            "estimated_hours": 3,
            "importance": 9,
            "dependencies": []
        },
        {
            "title": "Write API documentation",
            "due_date": "2025-11-28",
            "estimated_hours": 4,
            "importance": 6,
            "dependencies": [1]
        },
        {
            "title": "Optimize database queries",
            "due_date": "2025-12-05",
            "estimated_hours": 6,
            "importance": 7,
            "dependencies": []
        },
        {
            "title": "Setup monitoring dashboard",
            "due_date": "2025-12-10",
            "estimated_hours": 8,
            "importance": 5,
            "dependencies": [2, 3]
        }
    ])
}
