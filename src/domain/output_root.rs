use std::path::{Component, Path, PathBuf};

use crate::domain::{AppError, ModuleName};

/// Shared build-output root for the whole project tree.
///
/// Computed once from the host's default output root and a relative offset,
/// then handed by reference to every module's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutputRoot(PathBuf);

impl BuildOutputRoot {
    /// Resolve `offset` against the host-provided default root.
    ///
    /// Fails when the host has not provided a default root; never guesses one.
    pub fn resolve(default_root: Option<&Path>, offset: &Path) -> Result<Self, AppError> {
        let default_root = default_root.ok_or(AppError::OutputRootUnavailable)?;
        if offset.is_absolute() || offset.has_root() {
            return Err(AppError::InvalidOutputOffset(offset.display().to_string()));
        }
        Ok(Self(normalize_path(&default_root.join(offset))))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Output directory for one module beneath this root.
    pub fn module_dir(&self, module: &ModuleName) -> PathBuf {
        self.0.join(module.as_str())
    }
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` above the filesystem root stays at the root.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}
