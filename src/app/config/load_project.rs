//! Project configuration loading from the project directory.

use std::fs;
use std::path::Path;

use crate::domain::project::{parse, paths};
use crate::domain::{AppError, ProjectConfig};
use crate::services::FilesystemPackageSource;

/// Load and parse `buildpin.toml` from `project_dir`.
pub fn load_project(project_dir: &Path) -> Result<ProjectConfig, AppError> {
    let config_path = paths::config(project_dir);
    if !config_path.exists() {
        return Err(AppError::ProjectConfigMissing(project_dir.display().to_string()));
    }

    let content = fs::read_to_string(&config_path)?;
    parse::parse_project_content(&content)
}

/// Open every configured repository as a local package source.
pub fn load_sources(
    config: &ProjectConfig,
    project_dir: &Path,
) -> Result<Vec<FilesystemPackageSource>, AppError> {
    config
        .repositories
        .iter()
        .map(|repository| FilesystemPackageSource::from_config(repository, project_dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = load_project(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::ProjectConfigMissing(_)));
    }

    #[test]
    fn loads_project_and_sources() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("buildpin.toml"),
            r#"
[output]
relative_offset = "../build"

[[repositories]]
name = "local"
location = "repo"

[[modules]]
name = "app"
"#,
        )
        .unwrap();

        let config = load_project(dir.path()).unwrap();
        let sources = load_sources(&config, dir.path()).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].root(), dir.path().join("repo"));
    }
}
