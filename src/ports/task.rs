//! On-demand actions registered with the task registry.

use std::path::PathBuf;

use crate::domain::AppError;

/// Result of running a registered task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Build outputs were deleted, or were already absent.
    Cleaned { path: PathBuf, removed: bool },
}

/// A named action that only runs when explicitly invoked.
pub trait Task {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn run(&self) -> Result<TaskOutcome, AppError>;
}
