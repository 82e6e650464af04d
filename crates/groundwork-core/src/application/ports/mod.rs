//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `groundwork-adapters` crate provides the production implementations.

use std::path::Path;

use crate::domain::TemplateAsset;
use crate::error::GroundworkResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `groundwork_adapters::filesystem::LocalFilesystem` (production)
/// - `groundwork_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths are always threaded explicitly; no implementation may change the
///   process working directory.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GroundworkResult<()>;

    /// Write content to a new file.
    fn write_file(&self, path: &Path, content: &str) -> GroundworkResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template asset discovery and reading.
///
/// Implemented by:
/// - `groundwork_adapters::templates::DirTemplateSource` (configurable dir)
/// - `groundwork_adapters::templates::EmbeddedTemplateSource` (built-ins)
pub trait TemplateSource: Send + Sync {
    /// Enumerate every template asset, including hidden-file templates.
    ///
    /// The returned order is the order files will be rendered and staged in;
    /// implementations sort by output name so runs are deterministic.
    fn discover(&self) -> GroundworkResult<Vec<TemplateAsset>>;

    /// Read the full textual content of one asset.
    fn read(&self, asset: &TemplateAsset) -> GroundworkResult<String>;
}

/// Port for isolated runtime environment creation.
///
/// Implemented by `groundwork_adapters::tools::PythonVenvProvisioner`, which
/// shells out to `python -m venv` and the platform activation command.
pub trait EnvironmentProvisioner: Send + Sync {
    /// Create (and activate) the environment inside `root`.
    fn provision(&self, root: &Path) -> GroundworkResult<()>;
}

/// Port for version-control initialization and staging.
///
/// Implemented by `groundwork_adapters::tools::GitVersionControl`.
pub trait VersionControl: Send + Sync {
    /// Initialize a repository at `root`.
    fn init(&self, root: &Path) -> GroundworkResult<()>;

    /// Stage a single generated file, named relative to `root`.
    fn stage(&self, root: &Path, file: &str) -> GroundworkResult<()>;
}
