// src/dag/scheduler_step.rs

//! Step-by-step execution result types for the scheduler.

use crate::dag::task_info::{ScheduledTask, TaskTitle};

/// Structured result of a single scheduler "step".
///
/// This is useful for tests that want to manually step the DAG and make
/// assertions about what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerStep {
    /// Task extracted from the ready set and appended to the order.
    pub scheduled: ScheduledTask,
    /// Dependents whose last outstanding dependency was `scheduled`, in
    /// title order.
    pub newly_ready: Vec<TaskTitle>,
}
