// src/dag/task_info.rs

//! Task descriptors fed into the scheduler and the entries it hands back.

use serde::{Deserialize, Serialize};

use crate::types::{DueDate, null_as_empty};

/// Canonical task title type; titles are the graph keys.
pub type TaskTitle = String;

/// One task as submitted for scheduling.
///
/// The serde shape is the schedule request body used by the project API:
///
/// ```json
/// { "title": "Write docs", "estimatedHours": 3,
///   "dueDate": "2024-02-01", "dependencies": ["Design"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub title: TaskTitle,

    /// Informational only; carried through to [`ScheduledTask`].
    #[serde(default)]
    pub estimated_hours: u32,

    /// Raw due date string. Unparseable values mean "no due date".
    #[serde(default)]
    pub due_date: Option<String>,

    /// Titles that must be ordered before this task.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: Vec<TaskTitle>,
}

impl TaskDescriptor {
    pub fn new(title: impl Into<TaskTitle>) -> Self {
        Self {
            title: title.into(),
            estimated_hours: 0,
            due_date: None,
            dependencies: Vec::new(),
        }
    }

    /// The parsed due date, if the raw value is a recognisable date.
    pub fn due(&self) -> Option<DueDate> {
        DueDate::from_optional(self.due_date.as_deref())
    }
}

/// Per-call state of a task inside the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// At least one dependency present in the request is not yet scheduled.
    Blocked,
    /// All dependencies are scheduled; waiting in the ready set.
    Ready,
    /// Extracted from the ready set and appended to the order. Terminal.
    Scheduled,
}

/// A task in its final position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub title: TaskTitle,
    pub due: Option<DueDate>,
    pub estimated_hours: u32,
}

/// Ordered result of a successful scheduling call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduledTask>,
}

impl Schedule {
    pub(crate) fn new(entries: Vec<ScheduledTask>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduledTask] {
        &self.entries
    }

    /// Titles in execution order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    pub fn into_titles(self) -> Vec<TaskTitle> {
        self.entries.into_iter().map(|e| e.title).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
