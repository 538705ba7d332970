// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::dag::TaskDescriptor;
use crate::types::null_as_empty;

/// `[config]` section.
///
/// Both switches tighten loading only; the scheduler itself always ignores
/// dangling dependencies and keeps the first of any duplicate titles.
///
/// ```toml
/// [config]
/// reject_unknown_dependencies = true
/// reject_duplicate_titles = true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigSection {
    /// Fail loading when a task depends on a title that is not submitted.
    #[serde(default, alias = "rejectUnknownDependencies")]
    pub reject_unknown_dependencies: bool,

    /// Fail loading when a title is submitted more than once.
    #[serde(default, alias = "rejectDuplicateTitles")]
    pub reject_duplicate_titles: bool,
}

/// `[task.<title>]` section of a TOML plan.
///
/// ```toml
/// [task.docs]
/// estimated_hours = 3
/// due_date = "2024-02-01"
/// dependencies = ["design"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    #[serde(default)]
    pub estimated_hours: u32,

    /// A string or a bare TOML date (`due_date = 2024-02-01`).
    #[serde(default)]
    pub due_date: Option<toml::Value>,

    /// Titles this task waits for. `after = [...]` is accepted as well.
    #[serde(default, alias = "after")]
    pub dependencies: Vec<String>,
}

impl TaskConfig {
    /// Due date as the raw string the scheduler expects.
    ///
    /// Values that are neither strings nor TOML dates are kept as their TOML
    /// rendering, which never parses as a date.
    pub fn due_date_string(&self) -> Option<String> {
        match self.due_date.as_ref()? {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Datetime(dt) => Some(dt.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn into_descriptor(self, title: String) -> TaskDescriptor {
        TaskDescriptor {
            title,
            estimated_hours: self.estimated_hours,
            due_date: self.due_date_string(),
            dependencies: self.dependencies,
        }
    }
}

/// TOML plan file as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlPlanFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// Keys are the task titles.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

impl From<TomlPlanFile> for RawPlanFile {
    fn from(file: TomlPlanFile) -> Self {
        let tasks = file
            .task
            .into_iter()
            .map(|(title, cfg)| cfg.into_descriptor(title))
            .collect();

        RawPlanFile {
            config: file.config,
            tasks,
        }
    }
}

/// Unvalidated task set, format-independent.
///
/// This is also the JSON schedule request body:
///
/// ```json
/// { "tasks": [ { "title": "A", "dueDate": "2024-02-01" } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlanFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<TaskDescriptor>,
}

/// A task set that passed validation and can be handed to the scheduler.
///
/// Construct through `PlanFile::try_from(raw)` (see `config::validate`).
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub config: ConfigSection,
    tasks: Vec<TaskDescriptor>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(config: ConfigSection, tasks: Vec<TaskDescriptor>) -> Self {
        Self { config, tasks }
    }

    /// Tasks in submission order.
    pub fn tasks(&self) -> &[TaskDescriptor] {
        &self.tasks
    }
}
