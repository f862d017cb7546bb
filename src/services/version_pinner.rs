use crate::domain::{Coordinate, OverrideTable, Version};

/// Applies forced versions uniformly to every module's resolution.
#[derive(Debug, Clone, Default)]
pub struct VersionPinner {
    table: OverrideTable,
}

impl VersionPinner {
    pub fn new(table: OverrideTable) -> Self {
        Self { table }
    }

    pub fn forced_version(&self, coordinate: &Coordinate) -> Option<&Version> {
        self.table.forced_version(coordinate)
    }

    /// Version a request for `coordinate` resolves to before conflict resolution.
    pub fn pin<'a>(&'a self, coordinate: &Coordinate, requested: &'a Version) -> &'a Version {
        self.forced_version(coordinate).unwrap_or(requested)
    }

    /// Human-readable notes about rules superseded by later duplicates.
    pub fn warnings(&self) -> Vec<String> {
        self.table
            .shadowed()
            .into_iter()
            .map(|rule| {
                let effective = self
                    .forced_version(&rule.coordinate)
                    .map(Version::as_str)
                    .unwrap_or_default();
                format!(
                    "force {}:{} is overridden by a later rule forcing {}",
                    rule.coordinate, rule.forced_version, effective
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionOverrideRule;

    fn pinner(rules: &[(&str, &str)]) -> VersionPinner {
        VersionPinner::new(OverrideTable::new(
            rules
                .iter()
                .map(|(c, v)| VersionOverrideRule {
                    coordinate: Coordinate::parse(c).unwrap(),
                    forced_version: Version::parse(v).unwrap(),
                })
                .collect(),
        ))
    }

    #[test]
    fn pin_replaces_requested_version_of_forced_coordinate() {
        let pinner = pinner(&[("androidx.core:core", "1.12.0")]);
        let requested = Version::parse("1.13.1").unwrap();
        let core = Coordinate::parse("androidx.core:core").unwrap();

        assert_eq!(pinner.pin(&core, &requested).as_str(), "1.12.0");
    }

    #[test]
    fn pin_keeps_requested_version_of_other_coordinates() {
        let pinner = pinner(&[("androidx.core:core", "1.12.0")]);
        let requested = Version::parse("33.0.0").unwrap();
        let guava = Coordinate::parse("com.google.guava:guava").unwrap();

        assert_eq!(pinner.pin(&guava, &requested).as_str(), "33.0.0");
    }

    #[test]
    fn warnings_name_superseded_rules() {
        let pinner = pinner(&[("androidx.core:core", "1.10.0"), ("androidx.core:core", "1.12.0")]);
        let warnings = pinner.warnings();

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("androidx.core:core:1.10.0"));
        assert!(warnings[0].ends_with("forcing 1.12.0"));
    }
}
