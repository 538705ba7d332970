// src/dag/cycle.rs

//! Cycle failure reported by the scheduler, plus diagnostics.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use thiserror::Error;

use crate::dag::graph::DependencyGraph;
use crate::dag::task_info::TaskTitle;

/// The submitted dependencies admit no execution order.
///
/// No partial order is carried. `unresolved` lists every task that never
/// became ready (sorted); `cycles` lists the actual cycles among them, each
/// sorted, so tasks that are only stuck downstream of a cycle show up in
/// `unresolved` but not in `cycles`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cyclic dependency detected; unresolved tasks: {}", .unresolved.join(", "))]
pub struct CyclicDependency {
    pub unresolved: Vec<TaskTitle>,
    pub cycles: Vec<Vec<TaskTitle>>,
}

impl CyclicDependency {
    /// Whether `title` sits on a cycle (as opposed to merely behind one).
    pub fn is_on_cycle(&self, title: &str) -> bool {
        self.cycles.iter().any(|c| c.iter().any(|t| t == title))
    }
}

/// Build the failure from the tasks left over when the ready set ran dry.
pub(crate) fn diagnose(graph: &DependencyGraph, unresolved: &[&str]) -> CyclicDependency {
    let residual: HashSet<&str> = unresolved.iter().copied().collect();

    // Edge direction: dep -> task, restricted to the residual subgraph.
    let mut sub: DiGraphMap<&str, ()> = DiGraphMap::new();
    for &title in unresolved {
        sub.add_node(title);
    }
    for &title in unresolved {
        for dep in graph.dependencies_of(title) {
            if residual.contains(dep.as_str()) {
                sub.add_edge(dep.as_str(), title, ());
            }
        }
    }

    let mut cycles: Vec<Vec<TaskTitle>> = tarjan_scc(&sub)
        .into_iter()
        .filter(|scc| scc.len() > 1 || sub.contains_edge(scc[0], scc[0]))
        .map(|scc| {
            let mut members: Vec<TaskTitle> = scc.into_iter().map(str::to_string).collect();
            members.sort();
            members
        })
        .collect();
    cycles.sort();

    let mut unresolved: Vec<TaskTitle> = unresolved.iter().map(|s| s.to_string()).collect();
    unresolved.sort();

    CyclicDependency { unresolved, cycles }
}
