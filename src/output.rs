// src/output.rs

//! Rendering of schedules, cycle failures and dry-run listings.
//!
//! JSON bodies mirror the project API responses:
//! `{"recommendedOrder": [...]}` on success and
//! `{"error": "Cyclic dependency detected.", ...}` on a cycle.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::PlanFile;
use crate::dag::{CyclicDependency, DependencyGraph, Schedule};
use crate::errors::Result;

pub const CYCLE_ERROR_MESSAGE: &str = "Cyclic dependency detected.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleResponse<'a> {
    recommended_order: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct CycleResponse<'a> {
    error: &'static str,
    unresolved: &'a [String],
    cycles: &'a [Vec<String>],
}

pub fn schedule_json(schedule: &Schedule) -> Result<String> {
    let body = ScheduleResponse {
        recommended_order: schedule.titles().collect(),
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn cycle_json(err: &CyclicDependency) -> Result<String> {
    let body = CycleResponse {
        error: CYCLE_ERROR_MESSAGE,
        unresolved: &err.unresolved,
        cycles: &err.cycles,
    };
    Ok(serde_json::to_string_pretty(&body)?)
}

/// One title per line, or numbered lines with due date and hours.
pub fn schedule_text(schedule: &Schedule, details: bool) -> String {
    let mut out = String::new();
    if !details {
        for title in schedule.titles() {
            let _ = writeln!(out, "{title}");
        }
        return out;
    }

    let width = schedule.len().to_string().len();
    for (idx, entry) in schedule.entries().iter().enumerate() {
        let due = entry
            .due
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:>width$}. {}  (due: {}, est: {}h)",
            idx + 1,
            entry.title,
            due,
            entry.estimated_hours,
        );
    }
    out
}

pub fn cycle_text(err: &CyclicDependency) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "dependencies cannot be satisfied: {CYCLE_ERROR_MESSAGE}");
    for cycle in err.cycles.iter() {
        let _ = writeln!(out, "  cycle: {}", cycle.join(" <-> "));
    }
    let blocked: Vec<&str> = err
        .unresolved
        .iter()
        .filter(|t| !err.is_on_cycle(t))
        .map(|t| t.as_str())
        .collect();
    if !blocked.is_empty() {
        let _ = writeln!(out, "  blocked behind a cycle: {}", blocked.join(", "));
    }
    out
}

/// Listing of the parsed task set, without scheduling.
pub fn dry_run_text(plan: &PlanFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "taskdag dry-run");
    let _ = writeln!(
        out,
        "  config.reject_unknown_dependencies = {}",
        plan.config.reject_unknown_dependencies
    );
    let _ = writeln!(
        out,
        "  config.reject_duplicate_titles = {}",
        plan.config.reject_duplicate_titles
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "tasks ({}):", plan.tasks().len());
    for task in plan.tasks() {
        let _ = writeln!(out, "  - {}", task.title);
        let _ = writeln!(out, "      estimated_hours: {}", task.estimated_hours);
        match (task.due_date.as_deref(), task.due()) {
            (Some(_), Some(due)) => {
                let _ = writeln!(out, "      due: {due}");
            }
            (Some(raw), None) => {
                let _ = writeln!(out, "      due: {raw:?} (unparseable; treated as none)");
            }
            (None, _) => {}
        }
        if !task.dependencies.is_empty() {
            let _ = writeln!(out, "      dependencies: {:?}", task.dependencies);
        }
    }

    let graph = DependencyGraph::build(plan.tasks());
    if !graph.dangling().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "ignored dependencies:");
        for (task, dep) in graph.dangling() {
            let _ = writeln!(out, "  - {task} -> {dep} (no such task)");
        }
    }
    if !graph.duplicates().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "duplicate titles (first occurrence kept):");
        for title in graph.duplicates() {
            let _ = writeln!(out, "  - {title}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::{TaskDescriptor, schedule};

    fn task(title: &str, due: Option<&str>, hours: u32, deps: &[&str]) -> TaskDescriptor {
        TaskDescriptor {
            title: title.to_string(),
            estimated_hours: hours,
            due_date: due.map(str::to_string),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn json_success_body() {
        let s = schedule(&[task("B", None, 0, &["A"]), task("A", None, 0, &[])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&schedule_json(&s).unwrap()).unwrap();

        assert_eq!(value, serde_json::json!({ "recommendedOrder": ["A", "B"] }));
    }

    #[test]
    fn json_cycle_body() {
        let err = schedule(&[task("A", None, 0, &["B"]), task("B", None, 0, &["A"])]).unwrap_err();
        let value: serde_json::Value = serde_json::from_str(&cycle_json(&err).unwrap()).unwrap();

        assert_eq!(value["error"], "Cyclic dependency detected.");
        assert_eq!(value["unresolved"], serde_json::json!(["A", "B"]));
        assert_eq!(value["cycles"], serde_json::json!([["A", "B"]]));
    }

    #[test]
    fn text_plain_and_detailed() {
        let s = schedule(&[
            task("A", Some("2024-02-01"), 3, &[]),
            task("B", None, 1, &["A"]),
        ])
        .unwrap();

        assert_eq!(schedule_text(&s, false), "A\nB\n");
        assert_eq!(
            schedule_text(&s, true),
            "1. A  (due: 2024-02-01, est: 3h)\n2. B  (due: -, est: 1h)\n"
        );
    }

    #[test]
    fn cycle_text_separates_blocked_tasks() {
        let err = schedule(&[
            task("A", None, 0, &["B"]),
            task("B", None, 0, &["A"]),
            task("C", None, 0, &["A"]),
        ])
        .unwrap_err();
        let text = cycle_text(&err);

        assert!(text.contains("cycle: A <-> B"));
        assert!(text.contains("blocked behind a cycle: C"));
    }
}
