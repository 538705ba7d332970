// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{Result, TaskdagError};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::TaskdagError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.config, raw.tasks))
    }
}

/// Check a raw plan without consuming it.
///
/// Cycles are deliberately not checked here; the scheduler reports them as
/// its own outcome.
pub fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_tasks(plan)?;
    validate_titles(plan)?;
    if plan.config.reject_duplicate_titles {
        reject_duplicate_titles(plan)?;
    }
    if plan.config.reject_unknown_dependencies {
        reject_unknown_dependencies(plan)?;
    }
    Ok(())
}

fn ensure_has_tasks(plan: &RawPlanFile) -> Result<()> {
    if plan.tasks.is_empty() {
        return Err(TaskdagError::ConfigError(
            "plan must contain at least one task".to_string(),
        ));
    }
    Ok(())
}

fn validate_titles(plan: &RawPlanFile) -> Result<()> {
    for (idx, task) in plan.tasks.iter().enumerate() {
        if task.title.trim().is_empty() {
            return Err(TaskdagError::ConfigError(format!(
                "task #{} has an empty title",
                idx + 1
            )));
        }
    }
    Ok(())
}

fn reject_duplicate_titles(plan: &RawPlanFile) -> Result<()> {
    let mut seen = HashSet::new();
    for task in plan.tasks.iter() {
        if !seen.insert(task.title.as_str()) {
            return Err(TaskdagError::DuplicateTitle(task.title.clone()));
        }
    }
    Ok(())
}

fn reject_unknown_dependencies(plan: &RawPlanFile) -> Result<()> {
    let titles: HashSet<&str> = plan.tasks.iter().map(|t| t.title.as_str()).collect();
    for task in plan.tasks.iter() {
        for dep in task.dependencies.iter() {
            if !titles.contains(dep.as_str()) {
                return Err(TaskdagError::UnknownDependency {
                    task: task.title.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}
