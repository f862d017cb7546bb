//! Pure parse/validate for `buildpin.toml`.

use crate::domain::{AppError, ProjectConfig};

/// Parse and validate project configuration from TOML content.
pub fn parse_project_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
