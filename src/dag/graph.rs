// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dag::task_info::{TaskDescriptor, TaskTitle};
use crate::types::DueDate;

/// Internal node structure: stores immediate deps and dependents.
#[derive(Debug, Clone)]
struct DagNode {
    due: Option<DueDate>,
    estimated_hours: u32,
    /// Direct dependencies that name tasks present in the request.
    deps: Vec<TaskTitle>,
    /// Direct dependents: tasks that list this one as a dependency.
    dependents: Vec<TaskTitle>,
}

/// Dependency graph for one scheduling call, keyed by task title.
///
/// Edges run from a dependency to its dependent. Only dependencies that name
/// a submitted task become edges; the rest are kept in [`dangling`] for
/// diagnostics.
///
/// When a title is submitted more than once, the first descriptor wins and
/// later ones are dropped (see [`duplicates`]).
///
/// [`dangling`]: DependencyGraph::dangling
/// [`duplicates`]: DependencyGraph::duplicates
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: HashMap<TaskTitle, DagNode>,
    dangling: Vec<(TaskTitle, TaskTitle)>,
    duplicates: Vec<TaskTitle>,
}

impl DependencyGraph {
    pub fn build(tasks: &[TaskDescriptor]) -> Self {
        let mut graph = DependencyGraph::default();

        // First pass: one node per distinct title, first occurrence wins.
        let mut kept: Vec<&TaskDescriptor> = Vec::with_capacity(tasks.len());
        for task in tasks {
            if graph.nodes.contains_key(&task.title) {
                warn!(
                    task = %task.title,
                    "duplicate task title; keeping the first occurrence"
                );
                graph.duplicates.push(task.title.clone());
                continue;
            }
            graph.nodes.insert(
                task.title.clone(),
                DagNode {
                    due: task.due(),
                    estimated_hours: task.estimated_hours,
                    deps: Vec::new(),
                    dependents: Vec::new(),
                },
            );
            kept.push(task);
        }

        // Second pass: wire edges now that every title is known.
        for task in kept {
            let mut seen: HashSet<&str> = HashSet::new();
            for dep in task.dependencies.iter() {
                if !seen.insert(dep.as_str()) {
                    continue;
                }

                match graph.nodes.get_mut(dep) {
                    Some(dep_node) => dep_node.dependents.push(task.title.clone()),
                    None => {
                        debug!(
                            task = %task.title,
                            dep = %dep,
                            "dependency names no submitted task; ignoring"
                        );
                        graph.dangling.push((task.title.clone(), dep.clone()));
                        continue;
                    }
                }

                if let Some(node) = graph.nodes.get_mut(&task.title) {
                    node.deps.push(dep.clone());
                }
            }
        }

        debug!(
            tasks = graph.nodes.len(),
            edges = graph.edge_count(),
            dangling = graph.dangling.len(),
            duplicates = graph.duplicates.len(),
            "built dependency graph"
        );

        graph
    }

    /// Return all task titles (unordered).
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.nodes.contains_key(title)
    }

    /// Number of distinct tasks.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.deps.len()).sum()
    }

    /// Immediate dependencies of a task that are present in the graph.
    pub fn dependencies_of(&self, title: &str) -> &[TaskTitle] {
        self.nodes
            .get(title)
            .map(|n| n.deps.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate dependents of a task.
    pub fn dependents_of(&self, title: &str) -> &[TaskTitle] {
        self.nodes
            .get(title)
            .map(|n| n.dependents.as_slice())
            .unwrap_or(&[])
    }

    /// Initial in-degree: number of distinct dependencies present in the graph.
    pub fn in_degree_of(&self, title: &str) -> usize {
        self.dependencies_of(title).len()
    }

    pub fn due_of(&self, title: &str) -> Option<DueDate> {
        self.nodes.get(title).and_then(|n| n.due)
    }

    pub fn estimated_hours_of(&self, title: &str) -> u32 {
        self.nodes.get(title).map(|n| n.estimated_hours).unwrap_or(0)
    }

    /// `(task, missing dependency)` pairs that produced no edge.
    pub fn dangling(&self) -> &[(TaskTitle, TaskTitle)] {
        &self.dangling
    }

    /// Titles whose later occurrences were dropped, once per dropped descriptor.
    pub fn duplicates(&self) -> &[TaskTitle] {
        &self.duplicates
    }
}
