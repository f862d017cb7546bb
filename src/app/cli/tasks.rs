//! Task commands: list and invoke registered actions.

use std::path::Path;

use crate::app::api::TaskOutcome;
use crate::domain::AppError;

pub fn run_list(project_dir: &Path) -> Result<(), AppError> {
    let tasks = crate::app::api::list_tasks_at(project_dir)?;
    for task in tasks {
        println!("{:<8} {}", task.name, task.description);
    }
    Ok(())
}

pub fn run_task(project_dir: &Path, name: &str) -> Result<(), AppError> {
    match crate::app::api::run_task_at(project_dir, name)? {
        TaskOutcome::Cleaned { path, removed: true } => {
            println!("✅ Removed build output at {}", path.display());
        }
        TaskOutcome::Cleaned { path, removed: false } => {
            println!("ℹ️ Build output at {} already absent", path.display());
        }
    }
    Ok(())
}
