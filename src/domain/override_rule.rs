//! Forced-version rules applied uniformly during resolution.

use serde::Deserialize;

use crate::domain::{Coordinate, Version};

/// Forces every request for `coordinate` to resolve to `version`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionOverrideRule {
    pub coordinate: Coordinate,
    #[serde(rename = "version")]
    pub forced_version: Version,
}

/// Ordered list of override rules. For duplicate coordinates the last rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    rules: Vec<VersionOverrideRule>,
}

impl OverrideTable {
    pub fn new(rules: Vec<VersionOverrideRule>) -> Self {
        Self { rules }
    }

    /// Effective forced version for a coordinate.
    pub fn forced_version(&self, coordinate: &Coordinate) -> Option<&Version> {
        self.rules
            .iter()
            .rev()
            .find(|rule| &rule.coordinate == coordinate)
            .map(|rule| &rule.forced_version)
    }

    /// Rules superseded by a later rule for the same coordinate.
    pub fn shadowed(&self) -> Vec<&VersionOverrideRule> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(idx, rule)| {
                self.rules[idx + 1..].iter().any(|later| later.coordinate == rule.coordinate)
            })
            .map(|(_, rule)| rule)
            .collect()
    }
}
