use taskdag::config::{ConfigSection, PlanFile, RawPlanFile};
use taskdag::dag::TaskDescriptor;

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                config: ConfigSection::default(),
                tasks: Vec::new(),
            },
        }
    }

    pub fn with_task(mut self, task: TaskDescriptor) -> Self {
        self.plan.tasks.push(task);
        self
    }

    pub fn reject_unknown_dependencies(mut self, val: bool) -> Self {
        self.plan.config.reject_unknown_dependencies = val;
        self
    }

    pub fn reject_duplicate_titles(mut self, val: bool) -> Self {
        self.plan.config.reject_duplicate_titles = val;
        self
    }

    pub fn raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn try_build(self) -> anyhow::Result<PlanFile> {
        Ok(PlanFile::try_from(self.plan)?)
    }

    pub fn build(self) -> PlanFile {
        self.try_build()
            .expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskDescriptor`.
pub struct TaskBuilder {
    task: TaskDescriptor,
}

impl TaskBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskDescriptor::new(title),
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.task.due_date = Some(date.to_string());
        self
    }

    pub fn hours(mut self, hours: u32) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn build(self) -> TaskDescriptor {
        self.task
    }
}

/// Shorthand for a task with dependencies and no due date.
pub fn task(title: &str, deps: &[&str]) -> TaskDescriptor {
    deps.iter()
        .fold(TaskBuilder::new(title), |b, d| b.after(d))
        .build()
}
