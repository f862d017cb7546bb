use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::identities::validation::validate_module_name;

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

const PROJECT_TEMPLATE: &str = "buildpin.toml.j2";
const DEFAULT_ANCHOR: &str = "app";

/// Render the starter `buildpin.toml`.
pub fn render_project_file(project_name: &str) -> Result<String, AppError> {
    if !validate_module_name(project_name) {
        return Err(AppError::config_error(format!(
            "Invalid project name '{}': must be alphanumeric with hyphens, underscores, or periods",
            project_name
        )));
    }

    let template = SCAFFOLD_DIR
        .get_file(PROJECT_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::config_error(format!("Missing scaffold file: {}", PROJECT_TEMPLATE)))?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_template(PROJECT_TEMPLATE, template).map_err(|e| {
        AppError::config_error(format!("Failed to load template {}: {}", PROJECT_TEMPLATE, e))
    })?;

    let rendered = env
        .get_template(PROJECT_TEMPLATE)
        .and_then(|tmpl| tmpl.render(context! { project_name, anchor => DEFAULT_ANCHOR }))
        .map_err(|e| {
            AppError::config_error(format!("Failed to render {}: {}", PROJECT_TEMPLATE, e))
        })?;

    Ok(rendered)
}

/// Derive a valid project name from a directory name.
pub fn project_name_from_dir(dir_name: &str) -> String {
    let sanitized: String = dir_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
        .collect();
    if validate_module_name(&sanitized) { sanitized } else { "project".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::parse_project_content;

    #[test]
    fn rendered_project_file_parses() {
        let content = render_project_file("speech_to_text").unwrap();
        let config = parse_project_content(&content).unwrap();

        assert_eq!(config.project.name.as_deref(), Some("speech_to_text"));
        assert_eq!(config.module_names(), vec!["app"]);
        assert_eq!(config.repositories.len(), 2);
        assert!(config.force.is_empty());
    }

    #[test]
    fn rejects_invalid_project_name() {
        assert!(render_project_file("bad\"name").is_err());
    }

    #[test]
    fn dir_names_are_sanitized() {
        assert_eq!(project_name_from_dir("speech to text"), "speech_to_text");
        assert_eq!(project_name_from_dir(".."), "project");
    }
}
