//! Build-output relocation for the whole project tree.

use std::path::Path;

use crate::domain::project::paths;
use crate::domain::{AppError, BuildOutputRoot, ModuleNode, ProjectConfig, ProjectLayout};

/// Redirects every module's output directory beneath one shared root.
pub struct OutputPathRelocator;

impl OutputPathRelocator {
    /// Compute the shared root and point each module at `<root>/<module name>`.
    ///
    /// The root is computed before any module is touched, so a missing default
    /// root leaves every module at its original location.
    pub fn relocate(
        default_root: Option<&Path>,
        offset: &Path,
        modules: &mut [ModuleNode],
    ) -> Result<BuildOutputRoot, AppError> {
        let root = BuildOutputRoot::resolve(default_root, offset)?;
        Self::apply(&root, modules)?;
        Ok(root)
    }

    pub fn apply(root: &BuildOutputRoot, modules: &mut [ModuleNode]) -> Result<(), AppError> {
        for module in modules.iter_mut() {
            let dir = root.module_dir(module.name());
            module.relocate(dir)?;
        }
        Ok(())
    }

    /// Build the project layout from configuration.
    ///
    /// `default_root` is the host's build directory for the root project;
    /// `[output].default_root` takes precedence when configured.
    pub fn configure(
        config: &ProjectConfig,
        project_dir: &Path,
        default_root: Option<&Path>,
    ) -> Result<ProjectLayout, AppError> {
        let configured_root = config.output.default_root.as_ref().map(|p| project_dir.join(p));
        let default_root = configured_root.as_deref().or(default_root);

        let mut modules: Vec<ModuleNode> = config
            .evaluation_order()
            .into_iter()
            .map(|m| {
                ModuleNode::new(m.name.clone(), paths::default_module_output(project_dir, &m.name))
                    .with_dependencies(m.dependencies.clone())
            })
            .collect();

        let output_root =
            Self::relocate(default_root, &config.output.relative_offset, &mut modules)?;

        Ok(ProjectLayout { project_dir: project_dir.to_path_buf(), output_root, modules })
    }
}
