//! Module coordinates.

use std::fmt;
use std::str::FromStr;

/// The identifier of a dependency being queried for available versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleCoordinate {
    /// The group (organisation or namespace) of the module.
    pub group: String,
    /// The module name within its group.
    pub name: String,
}

/// Error returned when a `group:name` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    #[error("module coordinate has an empty group: {0:?}")]
    EmptyGroup(String),
    #[error("module coordinate has an empty name: {0:?}")]
    EmptyName(String),
    #[error("invalid module coordinate, expected: <group>:<name>, got: {0:?}")]
    Malformed(String),
}

impl ModuleCoordinate {
    /// Creates a coordinate from its group and name.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

impl FromStr for ModuleCoordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.len() != 2 {
            return Err(CoordinateError::Malformed(s.to_string()));
        }

        let (group, name) = (parts[0].trim(), parts[1].trim());
        if group.is_empty() {
            return Err(CoordinateError::EmptyGroup(s.to_string()));
        }
        if name.is_empty() {
            return Err(CoordinateError::EmptyName(s.to_string()));
        }

        Ok(Self::new(group, name))
    }
}
