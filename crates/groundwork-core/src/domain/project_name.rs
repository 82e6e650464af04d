//! Validated project names.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A project name that has passed validation.
///
/// Invariants, enforced at construction and immutable afterwards:
/// - non-empty
/// - not equal to `.`
/// - does not start or end with `-`
/// - contains only ASCII alphanumerics, `-`, or `_`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if raw == "." {
            return Err(DomainError::DotName);
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(DomainError::HyphenAtEdge { name: raw.into() });
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
        {
            return Err(DomainError::InvalidCharacter {
                name: raw.into(),
                character: bad,
            });
        }
        Ok(Self(raw.into()))
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
