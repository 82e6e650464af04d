//! Python virtual environment provisioner.

use std::path::Path;

use tracing::{info, instrument};

use groundwork_core::{application::ports::EnvironmentProvisioner, error::GroundworkResult};

use super::run_tool;

/// Provisions a `.venv` inside the project root via `python -m venv`, then
/// runs the platform's activation command.
///
/// Activation happens in a child shell and cannot alter the caller's
/// environment; it still runs so a broken venv fails the scaffold
/// immediately instead of at first use.
#[derive(Debug, Clone)]
pub struct PythonVenvProvisioner {
    python: String,
}

impl PythonVenvProvisioner {
    /// Use the default `python` interpreter from PATH.
    pub fn new() -> Self {
        Self {
            python: "python".into(),
        }
    }

    /// Use a specific interpreter (e.g. `python3`).
    pub fn with_interpreter(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl Default for PythonVenvProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProvisioner for PythonVenvProvisioner {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn provision(&self, root: &Path) -> GroundworkResult<()> {
        run_tool(root, &self.python, &["-m", "venv", ".venv"])?;
        info!("Virtual environment created");

        #[cfg(windows)]
        run_tool(root, "cmd", &["/C", r".venv\Scripts\activate"])?;
        #[cfg(not(windows))]
        run_tool(root, "sh", &["-c", ". .venv/bin/activate"])?;
        info!("Virtual environment activated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interpreter_is_python() {
        assert_eq!(PythonVenvProvisioner::new().python, "python");
    }

    #[test]
    fn custom_interpreter_is_kept() {
        let p = PythonVenvProvisioner::with_interpreter("python3");
        assert_eq!(p.python, "python3");
    }

    #[test]
    fn missing_interpreter_surfaces_as_error() {
        let tmp = tempfile::tempdir().unwrap();
        let p = PythonVenvProvisioner::with_interpreter("groundwork-no-such-python");
        assert!(p.provision(tmp.path()).is_err());
    }
}
