//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem entry already exists at the project root path.
    #[error("The directory \"{path}\" already exists", path = .path.display())]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed (directory creation, file write).
    #[error("Filesystem error at {path}: {reason}", path = .path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A template asset could not be read.
    #[error("Failed to read template {path}: {reason}", path = .path.display())]
    TemplateRead { path: PathBuf, reason: String },

    /// Template discovery failed (source location unreadable).
    #[error("Failed to discover templates under {path}: {reason}", path = .path.display())]
    TemplateDiscovery { path: PathBuf, reason: String },

    /// An external tool could not be spawned or exited unsuccessfully.
    #[error("External tool failed: {command}: {reason}")]
    ExternalTool { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::TemplateRead { path, .. } => vec![
                format!("Could not read template asset: {}", path.display()),
                "Check that the template directory is readable".into(),
            ],
            Self::TemplateDiscovery { path, .. } => vec![
                format!("Could not enumerate: {}", path.display()),
                "Check the --templates path or the templates.dir config key".into(),
            ],
            Self::ExternalTool { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure the tool is installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateRead { .. } | Self::TemplateDiscovery { .. } => ErrorCategory::Internal,
            Self::ExternalTool { .. } => ErrorCategory::ExternalTool,
        }
    }
}
