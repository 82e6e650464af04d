//! Directory-backed template source.
//!
//! Discovers every `*.template` file directly under a configurable root
//! directory, hidden-file templates included. The root is supplied by the
//! caller (CLI flag or config key) rather than being derived from the
//! install location, so the renderer stays testable in isolation.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use groundwork_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateAsset,
    error::GroundworkResult,
};

/// Template source backed by a directory of `*.template` files.
#[derive(Debug, Clone)]
pub struct DirTemplateSource {
    root: PathBuf,
}

impl DirTemplateSource {
    /// Create a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured template directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirTemplateSource {
    /// Enumerate template assets, sorted by output name.
    ///
    /// Filesystem enumeration order is platform-dependent; sorting makes
    /// render and staging order reproducible across runs.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn discover(&self) -> GroundworkResult<Vec<TemplateAsset>> {
        let mut assets = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::TemplateDiscovery {
                path: self.root.clone(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(asset) = TemplateAsset::from_source(entry.path()) {
                debug!(asset = asset.output_name(), "Discovered template");
                assets.push(asset);
            }
        }

        assets.sort_by(|a, b| a.output_name().cmp(b.output_name()));
        Ok(assets)
    }

    fn read(&self, asset: &TemplateAsset) -> GroundworkResult<String> {
        std::fs::read_to_string(asset.source()).map_err(|e| {
            ApplicationError::TemplateRead {
                path: asset.source().to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
