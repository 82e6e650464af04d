//! `groundwork completions` — shell completion script generation.

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Write a completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let shell = match args.shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "groundwork", &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // generate() writes to any io::Write; render into a buffer to check the
    // script mentions our binary name.
    #[test]
    fn bash_script_names_the_binary() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(clap_complete::Shell::Bash, &mut cmd, "groundwork", &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("groundwork"));
    }

    #[test]
    fn zsh_script_is_nonempty() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(clap_complete::Shell::Zsh, &mut cmd, "groundwork", &mut buf);
        assert!(!buf.is_empty());
    }
}
