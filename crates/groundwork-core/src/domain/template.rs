//! Template assets: source files that produce generated project files.

use std::path::{Path, PathBuf};

/// Recognized suffix for template assets.
pub const TEMPLATE_SUFFIX: &str = ".template";

/// A discovered template asset.
///
/// Lifecycle: read once, never mutated; produces exactly one generated file
/// (same base name with the suffix stripped) in the project root. Hidden
/// files keep their leading dot: `.gitignore.template` → `.gitignore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAsset {
    source: PathBuf,
    output_name: String,
}

impl TemplateAsset {
    /// Build an asset from a source path, deriving the output name by
    /// stripping [`TEMPLATE_SUFFIX`].
    ///
    /// Returns `None` when the file name does not carry the suffix, or when
    /// stripping it leaves nothing (a file literally named `.template`).
    pub fn from_source(source: impl Into<PathBuf>) -> Option<Self> {
        let source = source.into();
        let file_name = source.file_name()?.to_str()?;
        let output_name = file_name.strip_suffix(TEMPLATE_SUFFIX)?;
        if output_name.is_empty() {
            return None;
        }
        Some(Self {
            output_name: output_name.to_string(),
            source,
        })
    }

    /// Build an asset whose content lives somewhere other than a file (e.g.
    /// embedded in the binary). `source` is an opaque identifier in that case.
    pub fn with_output_name(source: impl Into<PathBuf>, output_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output_name: output_name.into(),
        }
    }

    /// Where the asset content comes from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Name of the generated file, suffix stripped.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}
