//! Project model loaded from `buildpin.toml`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, DependencyRequest, ModuleName, OverrideTable, VersionOverrideRule};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,
    pub output: OutputConfig,
    #[serde(default)]
    pub repositories: Vec<RepositoryConfig>,
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
    #[serde(default)]
    pub force: Vec<VersionOverrideRule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: Option<String>,
    /// Module evaluated before every other module.
    #[serde(default)]
    pub evaluation_anchor: Option<ModuleName>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Overrides the host default output root, relative to the project directory.
    #[serde(default)]
    pub default_root: Option<PathBuf>,
    pub relative_offset: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    pub name: String,
    /// Relative path, absolute path or `file://` URL.
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleConfig {
    pub name: ModuleName,
    #[serde(default)]
    pub dependencies: Vec<DependencyRequest>,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.modules.is_empty() {
            return Err(AppError::config_error(
                "No modules declared in buildpin.toml. Add at least one [[modules]] entry.",
            ));
        }

        let mut seen = BTreeSet::new();
        for module in &self.modules {
            if !seen.insert(module.name.as_str()) {
                return Err(AppError::DuplicateModule(module.name.to_string()));
            }
        }

        if let Some(anchor) = &self.project.evaluation_anchor
            && !seen.contains(anchor.as_str())
        {
            return Err(AppError::ModuleNotFound {
                name: anchor.to_string(),
                available: self.module_names().join(", "),
            });
        }

        let mut repository_names = BTreeSet::new();
        for repository in &self.repositories {
            if repository.name.trim().is_empty() {
                return Err(AppError::config_error("Repository name must not be empty"));
            }
            if !repository_names.insert(repository.name.as_str()) {
                return Err(AppError::config_error(format!(
                    "Repository '{}' is declared more than once",
                    repository.name
                )));
            }
        }

        Ok(())
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    /// Modules in evaluation order: the anchor first, then declaration order.
    pub fn evaluation_order(&self) -> Vec<&ModuleConfig> {
        let anchor = self.project.evaluation_anchor.as_ref();
        let mut ordered: Vec<&ModuleConfig> =
            self.modules.iter().filter(|m| Some(&m.name) == anchor).collect();
        ordered.extend(self.modules.iter().filter(|m| Some(&m.name) != anchor));
        ordered
    }

    pub fn override_table(&self) -> OverrideTable {
        OverrideTable::new(self.force.clone())
    }
}
