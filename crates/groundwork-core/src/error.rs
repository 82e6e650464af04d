//! Crate-level error type.
//!
//! Domain and application errors each carry their own variants; this wrapper
//! gives callers one type to match on and one place to ask for suggestions
//! and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Any failure a scaffold run can produce.
#[derive(Debug, Error, Clone)]
pub enum GroundworkError {
    /// Business-rule violation (bad project name, malformed asset).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Orchestration failure (filesystem, templates, external tools).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Invalid setup detected before the run started.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Should-not-happen states.
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl GroundworkError {
    /// Suggestions shown under the error message, in display order.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Groundwork".into(),
                "Please report it at: https://github.com/groundwork-tools/groundwork/issues"
                    .into(),
            ],
        }
    }

    /// Coarse classification used for message styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Classification of a [`GroundworkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected user input.
    Validation,
    /// A spawned tool failed or was missing.
    ExternalTool,
    /// Bad configuration.
    Configuration,
    /// Everything else.
    Internal,
}

pub type GroundworkResult<T> = Result<T, GroundworkError>;
