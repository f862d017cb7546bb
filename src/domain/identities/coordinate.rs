use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::validate_coordinate_part;
use crate::domain::{AppError, Version};

/// A package coordinate in `group:artifact` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    group: String,
    artifact: String,
}

impl Coordinate {
    /// Parse a `group:artifact` coordinate.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidCoordinate(raw.to_string());
        let (group, artifact) = raw.trim().split_once(':').ok_or_else(invalid)?;
        if !validate_coordinate_part(group) || !validate_coordinate_part(artifact) {
            return Err(invalid());
        }
        Ok(Self { group: group.to_string(), artifact: artifact.to_string() })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Relative directory of this coordinate inside a Maven-style repository.
    pub fn repository_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('.').collect();
        path.push(&self.artifact);
        path
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Coordinate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A dependency request in `group:artifact:version` notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyRequest {
    pub coordinate: Coordinate,
    pub version: Version,
}

impl DependencyRequest {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidDependency(raw.to_string());
        let (coordinate, version) = raw.trim().rsplit_once(':').ok_or_else(invalid)?;
        let coordinate = Coordinate::parse(coordinate).map_err(|_| invalid())?;
        let version = Version::parse(version).map_err(|_| invalid())?;
        Ok(Self { coordinate, version })
    }
}

impl fmt::Display for DependencyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.coordinate, self.version)
    }
}

impl<'de> Deserialize<'de> for DependencyRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DependencyRequest::parse(&raw).map_err(serde::de::Error::custom)
    }
}
