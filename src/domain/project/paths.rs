use std::path::{Path, PathBuf};

use crate::domain::ModuleName;

pub const PROJECT_FILE: &str = "buildpin.toml";

/// `buildpin.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(PROJECT_FILE)
}

/// Build directory the host uses for the root project when nothing is configured.
pub fn default_output_root(root: &Path) -> PathBuf {
    root.join("build")
}

/// Build directory the host uses for a module before relocation.
pub fn default_module_output(root: &Path, module: &ModuleName) -> PathBuf {
    root.join(module.as_str()).join("build")
}
