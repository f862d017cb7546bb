use std::path::{Path, PathBuf};

use crate::domain::ProjectConfig;
use crate::ports::PackageSource;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: PackageSource> {
    project_dir: PathBuf,
    default_output_root: Option<PathBuf>,
    config: ProjectConfig,
    sources: Vec<S>,
}

impl<S: PackageSource> AppContext<S> {
    /// Create a new application context.
    pub fn new(
        project_dir: PathBuf,
        default_output_root: Option<PathBuf>,
        config: ProjectConfig,
        sources: Vec<S>,
    ) -> Self {
        Self { project_dir, default_output_root, config, sources }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Build directory the host provides for the root project, if any.
    pub fn default_output_root(&self) -> Option<&Path> {
        self.default_output_root.as_deref()
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Package sources shared by every module, in lookup order.
    pub fn sources(&self) -> &[S] {
        &self.sources
    }
}
