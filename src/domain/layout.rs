use std::path::{Path, PathBuf};

use crate::domain::{BuildOutputRoot, ModuleName, ModuleNode};

/// Configured project tree: the shared output root and every module in evaluation order.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub project_dir: PathBuf,
    pub output_root: BuildOutputRoot,
    pub modules: Vec<ModuleNode>,
}

impl ProjectLayout {
    /// Output directory of the root project itself.
    pub fn root_output_dir(&self) -> &Path {
        self.output_root.path()
    }

    pub fn module(&self, name: &str) -> Option<&ModuleNode> {
        self.modules.iter().find(|m| m.name().as_str() == name)
    }

    pub fn module_names(&self) -> Vec<&ModuleName> {
        self.modules.iter().map(ModuleNode::name).collect()
    }
}
