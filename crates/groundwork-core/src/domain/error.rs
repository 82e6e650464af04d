//! Domain-level errors: project-name validation failures.

use thiserror::Error;

/// Validation failures for a proposed project name.
///
/// Checks run in declaration order; the first failure wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The project name was empty")]
    EmptyName,

    #[error("The project name cannot be '.'")]
    DotName,

    #[error("The project name '{name}' cannot start or end with a hyphen")]
    HyphenAtEdge { name: String },

    #[error(
        "The project name '{name}' contains '{character}'; only alphanumeric \
         characters, hyphens, and underscores are allowed"
    )]
    InvalidCharacter { name: String, character: char },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a project name as the first argument".into(),
                "Example: groundwork new my-project".into(),
            ],
            Self::DotName => vec![
                "'.' refers to the current directory and cannot be a project name".into(),
                "Choose a real name, e.g. my-project".into(),
            ],
            Self::HyphenAtEdge { name } => vec![
                format!("'{}' starts or ends with '-'", name),
                "Start and end with a letter, digit, or underscore".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::InvalidCharacter { character, .. } => vec![
                format!("Remove or replace '{}'", character),
                "Use only alphanumeric characters, hyphens, and underscores".into(),
            ],
        }
    }
}
