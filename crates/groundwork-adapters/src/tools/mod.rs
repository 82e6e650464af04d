//! External tool adapters (subprocess invocations).

pub mod git;
pub mod venv;

pub use git::GitVersionControl;
pub use venv::PythonVenvProvisioner;

use std::path::Path;
use std::process::Command;

use groundwork_core::{application::ApplicationError, error::GroundworkResult};

/// Run `program args...` with `root` as the working directory, blocking until
/// it returns. Spawn failures and non-zero exit statuses both surface as
/// [`ApplicationError::ExternalTool`]; a hung tool stalls the run
/// indefinitely (no timeout).
pub(crate) fn run_tool(root: &Path, program: &str, args: &[&str]) -> GroundworkResult<()> {
    let display = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .map_err(|e| ApplicationError::ExternalTool {
            command: display.clone(),
            reason: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ApplicationError::ExternalTool {
            command: display,
            reason: status.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_external_tool_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run_tool(tmp.path(), "groundwork-no-such-tool", &[]).unwrap_err();
        assert!(err.to_string().contains("groundwork-no-such-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_status_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run_tool(tmp.path(), "sh", &["-c", "exit 3"]).unwrap_err();
        assert!(err.to_string().contains("sh -c exit 3"));
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(run_tool(tmp.path(), "true", &[]).is_ok());
    }
}
