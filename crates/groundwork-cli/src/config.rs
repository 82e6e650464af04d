//! Layered configuration loading.
//!
//! Precedence (lowest to highest):
//! 1. Built-in defaults
//! 2. Config file (`--config FILE`, or the platform config dir)
//! 3. Environment variables prefixed `GROUNDWORK_` (e.g.
//!    `GROUNDWORK_AUTHOR__FULLNAME`)
//!
//! CLI flags override all of the above, but that merging happens in the
//! command handlers, not here.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub author: AuthorConfig,
    pub templates: TemplatesConfig,
    pub output: OutputConfig,
}

/// Author identity used for template placeholders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Substituted for the `[fullname]` placeholder when `--fullname` is not
    /// given.  Empty by default.
    pub fullname: String,
}

/// Template lookup configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory of `*.template` assets.  When unset (and no `--templates`
    /// flag), the built-in templates are used.
    pub dir: Option<PathBuf>,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Disable ANSI colours even on a TTY.
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load(explicit_path: Option<&PathBuf>) -> CliResult<Self> {
        let mut builder = Config::builder();

        let path = match explicit_path {
            Some(p) => Some(p.clone()),
            None => Self::default_config_path(),
        };
        if let Some(path) = path {
            // required(false): silently skip a file that does not exist.
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("GROUNDWORK")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(|e| CliError::ConfigError {
            message: format!("failed to load configuration: {e}"),
            source: Some(Box::new(e)),
        })?;

        settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid configuration values: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Platform config file location, e.g.
    /// `~/.config/groundwork/config.toml` on Linux.
    fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "groundwork", "groundwork")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from a specific file, for tests and diagnostics.
    #[allow(dead_code)]
    pub fn load_from(path: &Path) -> CliResult<Self> {
        Self::load(Some(&path.to_path_buf()))
    }
}
