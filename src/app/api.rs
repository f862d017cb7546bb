//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::{
    AppContext,
    commands::{init, layout, resolve, tasks},
    config::{load_project, load_sources},
};
use crate::domain::project::paths;
use crate::services::{CLEAN_TASK, FilesystemPackageSource};

pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::resolve::ResolveOptions;
pub use crate::app::commands::tasks::TaskSummary;
pub use crate::domain::{AppError, ProjectLayout, ResolutionReport};
pub use crate::ports::TaskOutcome;

/// Create an `AppContext` for a project directory.
///
/// The host default output root is `<project>/build`.
fn create_context(path: PathBuf) -> Result<AppContext<FilesystemPackageSource>, AppError> {
    let project_dir = std::path::absolute(path)?;
    let config = load_project(&project_dir)?;
    let sources = load_sources(&config, &project_dir)?;
    let default_root = paths::default_output_root(&project_dir);
    Ok(AppContext::new(project_dir, Some(default_root), config, sources))
}

/// Write a starter `buildpin.toml` in the current directory.
pub fn init(name: Option<&str>) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, name)
}

/// Write a starter `buildpin.toml` at the specified path.
pub fn init_at(path: impl Into<PathBuf>, name: Option<&str>) -> Result<InitOutcome, AppError> {
    let path: PathBuf = path.into();
    let project_dir = std::path::absolute(path)?;
    init::execute(&project_dir, name)
}

/// Compute the build-output layout for the current directory.
pub fn layout() -> Result<ProjectLayout, AppError> {
    layout_at(std::env::current_dir()?)
}

/// Compute the build-output layout for the project at the specified path.
pub fn layout_at(path: impl Into<PathBuf>) -> Result<ProjectLayout, AppError> {
    let ctx = create_context(path.into())?;
    layout::execute(&ctx)
}

/// Resolve dependencies for the current directory.
pub fn resolve(options: ResolveOptions) -> Result<ResolutionReport, AppError> {
    resolve_at(std::env::current_dir()?, options)
}

/// Resolve dependencies, forced versions applied, for the project at the specified path.
pub fn resolve_at(
    path: impl Into<PathBuf>,
    options: ResolveOptions,
) -> Result<ResolutionReport, AppError> {
    let ctx = create_context(path.into())?;
    resolve::execute(&ctx, options)
}

/// List registered tasks for the project at the specified path.
pub fn list_tasks_at(path: impl Into<PathBuf>) -> Result<Vec<TaskSummary>, AppError> {
    let ctx = create_context(path.into())?;
    tasks::list(&ctx)
}

/// Invoke a registered task for the project at the specified path.
pub fn run_task_at(path: impl Into<PathBuf>, task: &str) -> Result<TaskOutcome, AppError> {
    let ctx = create_context(path.into())?;
    tasks::run(&ctx, task)
}

/// Delete the shared build output of the current directory's project.
pub fn clean() -> Result<TaskOutcome, AppError> {
    clean_at(std::env::current_dir()?)
}

/// Delete the shared build output of the project at the specified path.
pub fn clean_at(path: impl Into<PathBuf>) -> Result<TaskOutcome, AppError> {
    run_task_at(path, CLEAN_TASK)
}
