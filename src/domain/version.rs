//! Version strings and their ordering.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// Digits with leading zeros stripped.
    Numeric(String),
    /// Lowercased qualifier.
    Alpha(String),
}

impl Part {
    fn cmp_part(&self, other: &Part) -> Ordering {
        match (self, other) {
            (Part::Numeric(a), Part::Numeric(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Part::Alpha(a), Part::Alpha(b)) => a.cmp(b),
            (Part::Numeric(_), Part::Alpha(_)) => Ordering::Greater,
            (Part::Alpha(_), Part::Numeric(_)) => Ordering::Less,
        }
    }
}

/// A dependency version.
///
/// Ordering splits on `.`, `-`, `_` and `+` and also between digit and letter runs.
/// Numeric parts compare numerically and sort above qualifiers, so
/// `1.0-rc1 < 1.0 < 1.0.1 < 1.10`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    parts: Vec<Part>,
}

impl Version {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::InvalidVersion(raw.to_string());
        if raw.is_empty() {
            return Err(invalid());
        }

        let mut parts = Vec::new();
        for segment in raw.split(['.', '-', '_', '+']) {
            if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            split_runs(segment, &mut parts);
        }

        Ok(Self { raw: raw.to_string(), parts })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn split_runs(segment: &str, parts: &mut Vec<Part>) {
    let mut current = String::new();
    let mut numeric = false;
    for c in segment.chars() {
        let is_digit = c.is_ascii_digit();
        if !current.is_empty() && is_digit != numeric {
            parts.push(make_part(&current, numeric));
            current.clear();
        }
        numeric = is_digit;
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(make_part(&current, numeric));
    }
}

fn make_part(run: &str, numeric: bool) -> Part {
    if numeric {
        let trimmed = run.trim_start_matches('0');
        Part::Numeric(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
    } else {
        Part::Alpha(run.to_ascii_lowercase())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.parts.iter().zip(&other.parts) {
            let ord = a.cmp_part(b);
            if ord != Ordering::Equal {
                return ord;
            }
        }

        let shared = self.parts.len().min(other.parts.len());
        let by_length = match (self.parts.get(shared), other.parts.get(shared)) {
            (None, None) => Ordering::Equal,
            // A trailing qualifier marks a pre-release of the shorter version.
            (Some(Part::Alpha(_)), None) => Ordering::Less,
            (Some(Part::Numeric(_)), None) => Ordering::Greater,
            (None, Some(Part::Alpha(_))) => Ordering::Greater,
            (None, Some(Part::Numeric(_))) => Ordering::Less,
            (Some(_), Some(_)) => Ordering::Equal,
        };

        by_length.then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Version {}

impl std::hash::Hash for Version {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
