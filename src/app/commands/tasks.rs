use crate::app::AppContext;
use crate::app::commands::layout;
use crate::domain::AppError;
use crate::ports::{PackageSource, TaskOutcome};
use crate::services::{CleanTask, TaskRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub name: String,
    pub description: String,
}

/// Register the project's on-demand actions. Nothing runs here.
pub fn registry<S: PackageSource>(ctx: &AppContext<S>) -> Result<TaskRegistry, AppError> {
    let layout = layout::execute(ctx)?;
    let mut registry = TaskRegistry::new();
    registry.register(Box::new(CleanTask::new(layout.output_root, layout.project_dir)))?;
    Ok(registry)
}

pub fn list<S: PackageSource>(ctx: &AppContext<S>) -> Result<Vec<TaskSummary>, AppError> {
    let registry = registry(ctx)?;
    Ok(registry
        .describe()
        .into_iter()
        .map(|(name, description)| TaskSummary {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect())
}

pub fn run<S: PackageSource>(ctx: &AppContext<S>, name: &str) -> Result<TaskOutcome, AppError> {
    registry(ctx)?.invoke(name)
}
