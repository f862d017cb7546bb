use std::collections::BTreeMap;

use crate::domain::{AppError, Coordinate, DependencyRequest, Version};
use crate::ports::{PackageManifest, PackageSource};

/// Package source backed by a map, for resolver tests.
#[derive(Debug, Clone)]
pub struct InMemoryPackageSource {
    name: String,
    packages: BTreeMap<(Coordinate, String), PackageManifest>,
}

impl InMemoryPackageSource {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), packages: BTreeMap::new() }
    }

    /// Add `group:artifact:version` with the given dependency notations.
    pub fn with_package(mut self, notation: &str, dependencies: &[&str]) -> Self {
        let request = DependencyRequest::parse(notation).expect("valid package notation");
        let dependencies = dependencies
            .iter()
            .map(|d| DependencyRequest::parse(d).expect("valid dependency notation"))
            .collect();
        self.packages.insert(
            (request.coordinate, request.version.as_str().to_string()),
            PackageManifest { dependencies },
        );
        self
    }
}

impl PackageSource for InMemoryPackageSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(
        &self,
        coordinate: &Coordinate,
        version: &Version,
    ) -> Result<Option<PackageManifest>, AppError> {
        Ok(self.packages.get(&(coordinate.clone(), version.as_str().to_string())).cloned())
    }
}
