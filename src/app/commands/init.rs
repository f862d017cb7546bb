use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::project::paths;
use crate::services::scaffold_assets::{project_name_from_dir, render_project_file};

#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub project_name: String,
}

/// Write a starter `buildpin.toml` into `project_dir`.
pub fn execute(project_dir: &Path, name: Option<&str>) -> Result<InitOutcome, AppError> {
    let path = paths::config(project_dir);
    let exists = || AppError::ProjectConfigExists(project_dir.display().to_string());
    if path.exists() {
        return Err(exists());
    }

    let project_name = match name {
        Some(name) => name.to_string(),
        None => project_name_from_dir(
            &project_dir.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default(),
        ),
    };

    let content = render_project_file(&project_name)?;
    fs::create_dir_all(project_dir)?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Err(exists()),
        Err(err) => return Err(err.into()),
    };
    file.write_all(content.as_bytes())?;

    Ok(InitOutcome { path, project_name })
}
