//! Git repository initialization and staging.

use std::path::Path;

use tracing::{info, instrument};

use groundwork_core::{application::ports::VersionControl, error::GroundworkResult};

use super::run_tool;

/// Version control adapter shelling out to `git`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVersionControl;

impl GitVersionControl {
    pub fn new() -> Self {
        Self
    }
}

impl VersionControl for GitVersionControl {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn init(&self, root: &Path) -> GroundworkResult<()> {
        run_tool(root, "git", &["init"])?;
        info!("Git repository initialized");
        Ok(())
    }

    fn stage(&self, root: &Path, file: &str) -> GroundworkResult<()> {
        run_tool(root, "git", &["add", file])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests exercise the real `git` binary; it is a hard requirement
    // of the tool itself, so requiring it in the test environment is fair.

    #[test]
    fn init_creates_a_repository() {
        let tmp = tempfile::tempdir().unwrap();
        GitVersionControl::new().init(tmp.path()).unwrap();
        assert!(tmp.path().join(".git").exists());
    }

    #[test]
    fn stage_tracks_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let vcs = GitVersionControl::new();
        vcs.init(tmp.path()).unwrap();
        std::fs::write(tmp.path().join("a.txt"), "hello").unwrap();
        vcs.stage(tmp.path(), "a.txt").unwrap();
    }

    #[test]
    fn staging_a_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let vcs = GitVersionControl::new();
        vcs.init(tmp.path()).unwrap();
        assert!(vcs.stage(tmp.path(), "missing.txt").is_err());
    }
}
