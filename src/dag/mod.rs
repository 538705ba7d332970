// src/dag/mod.rs

//! Dependency graph and scheduling.
//!
//! - [`graph`] builds the per-call dependency graph from task descriptors.
//! - [`ready_set`] orders tasks that are ready to be scheduled.
//! - [`scheduler`] runs Kahn's algorithm over the graph.
//! - [`cycle`] describes the failure when no order exists.
//! - [`task_info`] holds the input descriptors and the ordered result.
//! - [`scheduler_step`] defines the result type for manual stepping.

pub mod cycle;
pub mod graph;
pub mod ready_set;
pub mod scheduler;
pub mod scheduler_step;
pub mod task_info;

pub use cycle::CyclicDependency;
pub use graph::DependencyGraph;
pub use scheduler::{Scheduler, schedule};
pub use scheduler_step::SchedulerStep;
pub use task_info::{Schedule, ScheduledTask, TaskDescriptor, TaskState, TaskTitle};
