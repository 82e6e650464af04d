//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "groundwork",
    bin_name = "groundwork",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Bootstrap a new project directory",
    long_about = "Groundwork creates a project directory with a fixed layout, \
                  a virtual environment, rendered template files, and an \
                  initialized git repository.",
    after_help = "EXAMPLES:\n\
        \x20 groundwork new my-project\n\
        \x20 groundwork new my-project --fullname \"Ada Lovelace\"\n\
        \x20 groundwork new my-project --templates ./my-templates --skip-venv\n\
        \x20 groundwork completions bash > /usr/share/bash-completion/completions/groundwork",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project directory.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 groundwork new my-project\n\
            \x20 groundwork new my-project --skip-venv --skip-git\n\
            \x20 groundwork new my-project --dry-run"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 groundwork completions bash > ~/.local/share/bash-completion/completions/groundwork\n\
            \x20 groundwork completions zsh  > ~/.zfunc/_groundwork\n\
            \x20 groundwork completions fish > ~/.config/fish/completions/groundwork.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `groundwork new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Desired project name; becomes a directory under the current one.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Directory of `*.template` assets. Defaults to the built-in set.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template directory (default: built-in templates)"
    )]
    pub templates: Option<PathBuf>,

    /// Value for the `[fullname]` placeholder.
    #[arg(
        long = "fullname",
        value_name = "NAME",
        help = "Author name for the [fullname] placeholder"
    )]
    pub fullname: Option<String>,

    /// Do not create the virtual environment.
    #[arg(long = "skip-venv", help = "Skip virtual environment creation")]
    pub skip_venv: bool,

    /// Do not initialize a git repository.
    #[arg(long = "skip-git", help = "Skip git initialization and staging")]
    pub skip_git: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `groundwork completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["groundwork", "new", "my-project"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn new_alias_n() {
        let cli = Cli::parse_from(["groundwork", "n", "my-project"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.name, "my-project");
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn new_flags_parse() {
        let cli = Cli::parse_from([
            "groundwork",
            "new",
            "demo",
            "--templates",
            "/tmp/assets",
            "--fullname",
            "Ada Lovelace",
            "--skip-venv",
            "--skip-git",
            "--dry-run",
        ]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.templates.as_deref(), Some(std::path::Path::new("/tmp/assets")));
            assert_eq!(args.fullname.as_deref(), Some("Ada Lovelace"));
            assert!(args.skip_venv);
            assert!(args.skip_git);
            assert!(args.dry_run);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["groundwork", "new"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["groundwork", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }
}
