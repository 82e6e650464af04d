//! CLI-level errors: presentation, suggestions, exit codes.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use groundwork_core::error::GroundworkError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything the scaffold run itself reported.
    #[error("Bootstrap failed: {0}")]
    Core(#[from] GroundworkError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Recovery hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Use ASCII alphanumeric characters, hyphens, and underscores".into(),
                "Hyphens may not start or end the name".into(),
                "Examples: my-project, my_app, project123".into(),
            ],

            Self::ProjectExists { path } => vec![
                "Pick a different project name".into(),
                format!(
                    "Or remove the existing directory first: rm -rf {}",
                    path.display()
                ),
            ],

            Self::ConfigError { .. } => vec![
                "Check the file passed via --config, or the default config.toml".into(),
                "Environment overrides use the GROUNDWORK_ prefix".into(),
            ],

            Self::Core(inner) => inner.suggestions(),

            Self::IoError { .. } => vec![
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Severity bucket, used only for log level selection.
    pub fn category(&self) -> ErrorCategory {
        use groundwork_core::error::ErrorCategory as Core;

        match self {
            Self::InvalidProjectName { .. } | Self::ProjectExists { .. } => {
                ErrorCategory::UserError
            }
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(inner) => match inner.category() {
                Core::Validation => ErrorCategory::UserError,
                Core::Configuration => ErrorCategory::Configuration,
                Core::ExternalTool | Core::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Every error exits 1. Argument-parse failures exit 2, but those never
    /// reach this type — clap reports them itself.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Render the full message block: error line, source chain when verbose,
    /// suggestions, and a `-v` hint otherwise.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();

        if color {
            out.push_str(&format!(
                "\n{} {}\n",
                "\u{2717}".red().bold(),
                self.to_string().red()
            ));
        } else {
            out.push_str(&format!("\nError: {self}\n"));
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!("  Caused by: {err}\n"));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let heading = if color {
                format!("\n{}\n", "Suggestions:".yellow().bold())
            } else {
                "\nSuggestions:\n".to_string()
            };
            out.push_str(&heading);
            for hint in &suggestions {
                out.push_str(&format!("  {hint}\n"));
            }
        }

        if !verbose {
            out.push_str("\nRe-run with -v / --verbose for more details.\n");
        }

        out
    }

    /// Mirror the error into the structured log at the right level.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("{self}"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!("{self}");
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }
}

/// Severity buckets for [`CliError::log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn invalid_name() -> CliError {
        CliError::InvalidProjectName {
            name: "bad name".into(),
            reason: "contains ' '".into(),
        }
    }

    #[test]
    fn invalid_name_suggestions_mention_charset() {
        assert!(
            invalid_name()
                .suggestions()
                .iter()
                .any(|s| s.contains("alphanumeric"))
        );
    }

    #[test]
    fn project_exists_suggests_different_name() {
        let err = CliError::ProjectExists {
            path: PathBuf::from("/tmp/test"),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("different project name"))
        );
    }

    #[test]
    fn core_errors_delegate_suggestions() {
        let err = CliError::Core(GroundworkError::Configuration {
            message: "bad key".into(),
        });
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn every_error_exits_one() {
        let errors = [
            invalid_name(),
            CliError::ProjectExists {
                path: PathBuf::from("/tmp/x"),
            },
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 1);
        }
    }

    #[test]
    fn validation_errors_are_user_errors() {
        assert_eq!(invalid_name().category(), ErrorCategory::UserError);
    }

    #[test]
    fn io_errors_are_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn plain_render_has_error_and_suggestions() {
        let s = invalid_name().render(false, false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn verbose_render_omits_the_hint() {
        let s = invalid_name().render(true, false);
        assert!(!s.contains("--verbose"));
    }
}
