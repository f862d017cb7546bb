//! Init command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_init(project_dir: &Path, name: Option<&str>) -> Result<(), AppError> {
    let outcome = crate::app::api::init_at(project_dir, name)?;
    println!("✅ Created {} for project '{}'", outcome.path.display(), outcome.project_name);
    Ok(())
}
