use serde::{Deserialize, Deserializer, Serialize};

use super::validation::validate_module_name;
use crate::domain::AppError;

/// A validated module name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - Safe to use as a single path component (no `/`, `\`, `..`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and create a new `ModuleName`.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_module_name(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidModuleName(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ModuleName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ModuleName::new(&raw).map_err(serde::de::Error::custom)
    }
}
