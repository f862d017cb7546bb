//! Package source port.
//!
//! A package source answers whether a concrete version of a coordinate exists
//! and, if so, which dependencies that version declares.

use crate::domain::{AppError, Coordinate, DependencyRequest, Version};

/// Metadata published for one version of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    pub dependencies: Vec<DependencyRequest>,
}

/// Port for looking up packages in a repository.
pub trait PackageSource {
    /// Display name used in resolution errors.
    fn name(&self) -> &str;

    /// Look up one version. `Ok(None)` when this source does not hold it.
    fn lookup(
        &self,
        coordinate: &Coordinate,
        version: &Version,
    ) -> Result<Option<PackageManifest>, AppError>;
}
