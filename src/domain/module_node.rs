use std::path::{Path, PathBuf};

use crate::domain::{AppError, DependencyRequest, ModuleName};

/// One buildable sub-unit of the project tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    name: ModuleName,
    output_dir: PathBuf,
    relocated: bool,
    dependencies: Vec<DependencyRequest>,
}

impl ModuleNode {
    /// Create a module with the host's default output location.
    pub fn new(name: ModuleName, default_output_dir: PathBuf) -> Self {
        Self { name, output_dir: default_output_dir, relocated: false, dependencies: Vec::new() }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyRequest>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn is_relocated(&self) -> bool {
        self.relocated
    }

    pub fn dependencies(&self) -> &[DependencyRequest] {
        &self.dependencies
    }

    /// Set the output directory. Written once; re-applying the same path is a no-op.
    pub fn relocate(&mut self, output_dir: PathBuf) -> Result<(), AppError> {
        if self.relocated {
            if self.output_dir == output_dir {
                return Ok(());
            }
            return Err(AppError::ModuleAlreadyRelocated {
                module: self.name.to_string(),
                current: self.output_dir.clone(),
            });
        }
        self.output_dir = output_dir;
        self.relocated = true;
        Ok(())
    }
}
