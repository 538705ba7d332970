use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::dag::cycle::{CyclicDependency, diagnose};
use crate::dag::graph::DependencyGraph;
use crate::dag::ready_set::ReadySet;
use crate::dag::scheduler_step::SchedulerStep;
use crate::dag::task_info::{Schedule, ScheduledTask, TaskDescriptor, TaskState};

/// Compute an execution order for `tasks`.
///
/// Dependencies always come first; among tasks that are ready at the same
/// time the earliest due date wins, then the smallest title. Returns
/// [`CyclicDependency`] if some tasks can never become ready.
///
/// Empty input yields an empty schedule. Callers that require at least one
/// task must check that themselves.
pub fn schedule(tasks: &[TaskDescriptor]) -> Result<Schedule, CyclicDependency> {
    let graph = DependencyGraph::build(tasks);
    Scheduler::new(&graph).finish()
}

/// Kahn's algorithm over a [`DependencyGraph`] with a priority-ordered ready
/// set.
///
/// Every piece of mutable state lives here and is dropped with the
/// scheduler, so one graph can be scheduled any number of times.
#[derive(Debug)]
pub struct Scheduler<'g> {
    graph: &'g DependencyGraph,
    states: HashMap<&'g str, TaskState>,
    /// Dependencies not yet scheduled, per task.
    remaining: HashMap<&'g str, usize>,
    ready: ReadySet<'g>,
    order: Vec<ScheduledTask>,
}

impl<'g> Scheduler<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        let mut states = HashMap::with_capacity(graph.len());
        let mut remaining = HashMap::with_capacity(graph.len());
        let mut ready = ReadySet::new();

        for title in graph.tasks() {
            let in_degree = graph.in_degree_of(title);
            remaining.insert(title, in_degree);

            if in_degree == 0 {
                states.insert(title, TaskState::Ready);
                ready.insert(title, graph.due_of(title));
            } else {
                states.insert(title, TaskState::Blocked);
            }
        }

        debug!(
            tasks = graph.len(),
            initially_ready = ready.len(),
            "scheduler: initial ready set built"
        );

        Self {
            graph,
            states,
            remaining,
            ready,
            order: Vec::with_capacity(graph.len()),
        }
    }

    /// Read-only view of the given task's state.
    pub fn state_of(&self, title: &str) -> Option<TaskState> {
        self.states.get(title).copied()
    }

    /// Titles currently in the ready set, in extraction order.
    pub fn ready_titles(&self) -> Vec<&'g str> {
        self.ready.titles().collect()
    }

    /// Titles scheduled so far.
    pub fn scheduled_titles(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|t| t.title.as_str())
    }

    /// `true` once the ready set is empty; no further step is possible.
    pub fn is_exhausted(&self) -> bool {
        self.ready.is_empty()
    }

    /// Schedule the next ready task.
    ///
    /// Returns `None` when the ready set is empty.
    pub fn step(&mut self) -> Option<SchedulerStep> {
        let graph = self.graph;
        let next = self.ready.pop_first()?;
        let title = next.title;

        self.states.insert(title, TaskState::Scheduled);
        let scheduled = ScheduledTask {
            title: title.to_string(),
            due: next.due,
            estimated_hours: graph.estimated_hours_of(title),
        };
        self.order.push(scheduled.clone());

        trace!(
            task = %title,
            position = self.order.len(),
            "scheduler: task scheduled"
        );

        let mut newly_ready = Vec::new();
        for dependent in graph.dependents_of(title) {
            let dependent = dependent.as_str();
            let Some(count) = self.remaining.get_mut(dependent) else {
                warn!(task = %dependent, "dependent missing from graph; ignoring");
                continue;
            };
            debug_assert!(*count > 0, "dependent {dependent} released twice");
            *count -= 1;

            if *count == 0 {
                self.states.insert(dependent, TaskState::Ready);
                self.ready.insert(dependent, graph.due_of(dependent));
                newly_ready.push(dependent.to_string());
            }
        }
        newly_ready.sort();

        Some(SchedulerStep {
            scheduled,
            newly_ready,
        })
    }

    /// Run to completion.
    pub fn finish(mut self) -> Result<Schedule, CyclicDependency> {
        while self.step().is_some() {}

        if self.order.len() == self.graph.len() {
            debug!(tasks = self.order.len(), "scheduler: all tasks scheduled");
            return Ok(Schedule::new(self.order));
        }

        let unresolved: Vec<&str> = self
            .states
            .iter()
            .filter(|(_, state)| **state == TaskState::Blocked)
            .map(|(title, _)| *title)
            .collect();

        let err = diagnose(self.graph, &unresolved);
        warn!(
            scheduled = self.order.len(),
            unresolved = ?err.unresolved,
            cycles = ?err.cycles,
            "scheduler: dependency cycle detected"
        );
        Err(err)
    }
}
