//! `groundwork new` — bootstrap a project directory.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info, instrument};

use groundwork_adapters::{
    DirTemplateSource, EmbeddedTemplateSource, GitVersionControl, LocalFilesystem,
    PythonVenvProvisioner,
};
use groundwork_core::{
    application::{ScaffoldOptions, ScaffoldService, TemplateSource},
    domain::{ProjectLayout, ProjectName},
    error::GroundworkError,
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run the `new` command.
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // Validate the name up front so the user gets a domain-level message
    // instead of a generic failure later in the run.
    let name = ProjectName::from_str(&args.name).map_err(|e| CliError::InvalidProjectName {
        name: args.name.clone(),
        reason: e.to_string(),
    })?;

    // Flags beat config file; config file beats the empty default.
    let fullname = args
        .fullname
        .unwrap_or_else(|| config.author.fullname.clone());

    let templates: Box<dyn TemplateSource> = match args.templates.or(config.templates.dir) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template directory");
            Box::new(DirTemplateSource::new(dir))
        }
        None => {
            debug!("Using built-in templates");
            Box::new(EmbeddedTemplateSource::new())
        }
    };

    // The project is always created under the current directory; the path is
    // carried explicitly from here on, the process cwd is never changed.
    let parent = Path::new(".");

    if args.dry_run {
        return preview(&name, parent, templates.as_ref(), &output);
    }

    output.header(&format!("Creating project '{name}'"))?;

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        templates,
        Box::new(PythonVenvProvisioner::new()),
        Box::new(GitVersionControl::new()),
    );

    let options = ScaffoldOptions {
        fullname,
        skip_env: args.skip_venv,
        skip_vcs: args.skip_git,
    };

    let report = service
        .scaffold(&name, parent, &options)
        .map_err(translate_core_error)?;

    for file in &report.created_files {
        output.print(&format!("  created {file}"))?;
    }

    info!(root = %report.root.display(), "Project created");
    output.success(&format!(
        "Project '{name}' created at {}",
        report.root.display()
    ))?;
    output.info(&format!("Next: cd {name} && . .venv/bin/activate"))?;

    Ok(())
}

/// Print what a run *would* create, without touching the filesystem.
fn preview(
    name: &ProjectName,
    parent: &Path,
    templates: &dyn TemplateSource,
    output: &OutputManager,
) -> CliResult<()> {
    let layout = ProjectLayout::new(parent, name);

    output.header(&format!("Dry run for project '{name}'"))?;
    output.print(&format!("  would create {}/", layout.root().display()))?;
    for dir in layout.subdirectories() {
        output.print(&format!("  would create {}/", dir.display()))?;
    }

    let assets = templates.discover().map_err(translate_core_error)?;
    for asset in &assets {
        output.print(&format!(
            "  would render {}",
            layout.file(asset.output_name()).display()
        ))?;
    }

    output.info("No files were created (--dry-run)")?;
    Ok(())
}

/// Lift core errors into CLI errors, surfacing the pre-existing-path case as
/// its own variant so it gets targeted suggestions.
fn translate_core_error(err: GroundworkError) -> CliError {
    use groundwork_core::application::ApplicationError;

    match err {
        GroundworkError::Application(ApplicationError::ProjectExists { path }) => {
            CliError::ProjectExists { path }
        }
        other => CliError::Core(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use groundwork_core::application::ApplicationError;

    #[test]
    fn project_exists_gets_dedicated_variant() {
        let core = GroundworkError::Application(ApplicationError::ProjectExists {
            path: PathBuf::from("/work/demo"),
        });
        let cli = translate_core_error(core);
        assert!(matches!(cli, CliError::ProjectExists { .. }));
    }

    #[test]
    fn other_core_errors_pass_through() {
        let core = GroundworkError::Application(ApplicationError::ExternalTool {
            command: "git init".into(),
            reason: "exit status 128".into(),
        });
        let cli = translate_core_error(core);
        assert!(matches!(cli, CliError::Core(_)));
    }
}
