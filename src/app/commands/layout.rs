use crate::app::AppContext;
use crate::domain::{AppError, ProjectLayout};
use crate::ports::PackageSource;
use crate::services::OutputPathRelocator;

/// Compute the shared output root and relocate every module beneath it.
pub fn execute<S: PackageSource>(ctx: &AppContext<S>) -> Result<ProjectLayout, AppError> {
    OutputPathRelocator::configure(ctx.config(), ctx.project_dir(), ctx.default_output_root())
}
