//! The fixed directory layout of a new project.

use std::path::{Path, PathBuf};

use crate::domain::ProjectName;

/// Subdirectories created under every project root, in creation order.
pub const PROJECT_SUBDIRS: [&str; 4] = ["data", "docs", "tests", "src"];

/// The directory layout of a project to be created.
///
/// Owns the absolute (or caller-relative) root path; every later step in the
/// scaffold run receives paths derived from here instead of relying on the
/// process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Layout for `name` under `parent`.
    pub fn new(parent: &Path, name: &ProjectName) -> Self {
        Self {
            root: parent.join(name.as_str()),
        }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full paths of the fixed subdirectories, in creation order.
    pub fn subdirectories(&self) -> impl Iterator<Item = PathBuf> + '_ {
        PROJECT_SUBDIRS.iter().map(|d| self.root.join(d))
    }

    /// Full path for a generated file directly under the root.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ProjectLayout {
        let name: ProjectName = "demo".parse().unwrap();
        ProjectLayout::new(Path::new("/work"), &name)
    }

    #[test]
    fn root_is_parent_joined_with_name() {
        assert_eq!(layout().root(), Path::new("/work/demo"));
    }

    #[test]
    fn exactly_four_subdirectories() {
        let dirs: Vec<_> = layout().subdirectories().collect();
        assert_eq!(dirs.len(), 4);
        assert_eq!(dirs[0], Path::new("/work/demo/data"));
        assert_eq!(dirs[1], Path::new("/work/demo/docs"));
        assert_eq!(dirs[2], Path::new("/work/demo/tests"));
        assert_eq!(dirs[3], Path::new("/work/demo/src"));
    }

    #[test]
    fn file_lands_in_root() {
        assert_eq!(layout().file(".gitignore"), Path::new("/work/demo/.gitignore"));
    }
}
