use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, Coordinate, DependencyRequest, RepositoryConfig, Version};
use crate::ports::{PackageManifest, PackageSource};

const MANIFEST_FILE: &str = "package.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
    #[serde(default)]
    dependencies: Vec<DependencyRequest>,
}

/// Local Maven-style repository: `<root>/<group path>/<artifact>/<version>/`.
#[derive(Debug, Clone)]
pub struct FilesystemPackageSource {
    name: String,
    root: PathBuf,
}

impl FilesystemPackageSource {
    pub fn new(name: impl Into<String>, root: PathBuf) -> Self {
        Self { name: name.into(), root }
    }

    /// Build a source from a `[[repositories]]` entry. Relative paths resolve
    /// against the project directory.
    pub fn from_config(repository: &RepositoryConfig, project_dir: &Path) -> Result<Self, AppError> {
        let root = resolve_location(repository, project_dir)?;
        Ok(Self::new(repository.name.clone(), root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn version_dir(&self, coordinate: &Coordinate, version: &Version) -> PathBuf {
        self.root.join(coordinate.repository_path()).join(version.as_str())
    }
}

fn resolve_location(repository: &RepositoryConfig, project_dir: &Path) -> Result<PathBuf, AppError> {
    let unsupported = |reason: String| AppError::UnsupportedRepository {
        name: repository.name.clone(),
        reason,
    };

    // Single-letter schemes are Windows drive letters, not URLs.
    if let Ok(url) = Url::parse(&repository.location)
        && url.scheme().len() > 1
    {
        if url.scheme() != "file" {
            return Err(unsupported(format!(
                "only local repositories are supported, got scheme '{}'",
                url.scheme()
            )));
        }
        return url
            .to_file_path()
            .map_err(|_| unsupported(format!("'{}' is not a local file URL", repository.location)));
    }

    let path = PathBuf::from(&repository.location);
    if path.is_absolute() { Ok(path) } else { Ok(project_dir.join(path)) }
}

impl PackageSource for FilesystemPackageSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(
        &self,
        coordinate: &Coordinate,
        version: &Version,
    ) -> Result<Option<PackageManifest>, AppError> {
        let dir = self.version_dir(coordinate, version);
        if !dir.is_dir() {
            return Ok(None);
        }

        let manifest_path = dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Ok(Some(PackageManifest::default()));
        }

        let content = fs::read_to_string(&manifest_path)?;
        let manifest: ManifestFile = toml::from_str(&content).map_err(|e| AppError::ParseError {
            what: manifest_path.display().to_string(),
            details: e.to_string(),
        })?;
        Ok(Some(PackageManifest { dependencies: manifest.dependencies }))
    }
}
