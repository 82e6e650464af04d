//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire bootstrap workflow:
//! 1. Refuse to touch a pre-existing project path
//! 2. Create the project root and fixed subdirectories
//! 3. Provision the isolated runtime environment
//! 4. Render template assets into the project root
//! 5. Initialize version control and stage the generated files
//!
//! Failure at any step terminates the run; there is no rollback of files
//! already written. The project root path is threaded through every step so
//! the process working directory is never mutated.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{EnvironmentProvisioner, Filesystem, TemplateSource, VersionControl},
    },
    domain::{ProjectLayout, ProjectName, ReplacementMap},
    error::GroundworkResult,
};

/// Knobs for a single scaffold run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Value for the `[fullname]` placeholder. Empty by default.
    pub fullname: String,
    /// Skip environment provisioning.
    pub skip_env: bool,
    /// Skip version-control initialization and staging.
    pub skip_vcs: bool,
}

/// What a scaffold run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// The created project root.
    pub root: PathBuf,
    /// Generated file names (relative to the root), in render order.
    pub created_files: Vec<String>,
}

/// Main bootstrap service.
///
/// Orchestrates directory creation, environment provisioning, template
/// rendering, and repository initialization through injected ports.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
    environment: Box<dyn EnvironmentProvisioner>,
    vcs: Box<dyn VersionControl>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateSource>,
        environment: Box<dyn EnvironmentProvisioner>,
        vcs: Box<dyn VersionControl>,
    ) -> Self {
        Self {
            filesystem,
            templates,
            environment,
            vcs,
        }
    }

    /// Bootstrap a new project named `name` under `parent`.
    ///
    /// This is the main use case. Steps run strictly top-to-bottom; the
    /// first error aborts the rest of the run.
    #[instrument(skip_all, fields(project = %name, parent = %parent.display()))]
    pub fn scaffold(
        &self,
        name: &ProjectName,
        parent: &Path,
        options: &ScaffoldOptions,
    ) -> GroundworkResult<ScaffoldReport> {
        let layout = ProjectLayout::new(parent, name);

        // 1. Pre-existing path check: never overwrite, never merge.
        if self.filesystem.exists(layout.root()) {
            return Err(ApplicationError::ProjectExists {
                path: layout.root().to_path_buf(),
            }
            .into());
        }

        // 2. Project root + fixed subdirectories. Fail-fast: if a
        //    subdirectory fails after the root was created, the root is left
        //    in place.
        self.create_layout(&layout)?;
        info!(root = %layout.root().display(), "Project directory created");

        // 3. Isolated runtime environment.
        if options.skip_env {
            debug!("Environment provisioning skipped");
        } else {
            self.environment.provision(layout.root())?;
            info!("Environment provisioned");
        }

        // 4. Template rendering.
        let replacements = ReplacementMap::for_today(name, &options.fullname);
        let created_files = self.render_templates(&layout, &replacements)?;
        info!(files = created_files.len(), "Templates rendered");

        // 5. Version control.
        if options.skip_vcs {
            debug!("Version control skipped");
        } else {
            self.initialize_repository(&layout, &created_files)?;
        }

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            root: layout.root().to_path_buf(),
            created_files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn create_layout(&self, layout: &ProjectLayout) -> GroundworkResult<()> {
        self.filesystem.create_dir_all(layout.root())?;
        for dir in layout.subdirectories() {
            self.filesystem.create_dir_all(&dir)?;
        }
        Ok(())
    }

    /// Render every discovered template asset into the project root.
    ///
    /// Returns the generated file names in discovery order. A read or write
    /// failure aborts the run; files already written stay on disk.
    fn render_templates(
        &self,
        layout: &ProjectLayout,
        replacements: &ReplacementMap,
    ) -> GroundworkResult<Vec<String>> {
        let assets = self.templates.discover()?;
        let mut created_files = Vec::with_capacity(assets.len());

        for asset in &assets {
            let content = self.templates.read(asset)?;
            let rendered = replacements.apply(&content);
            self.filesystem
                .write_file(&layout.file(asset.output_name()), &rendered)?;
            debug!(file = asset.output_name(), "Created file");
            created_files.push(asset.output_name().to_string());
        }

        Ok(created_files)
    }

    /// Initialize the repository and stage each generated file.
    ///
    /// Repository initialization failure aborts. Staging is per-file
    /// fire-and-forget: one failure is logged and the loop continues.
    fn initialize_repository(
        &self,
        layout: &ProjectLayout,
        created_files: &[String],
    ) -> GroundworkResult<()> {
        self.vcs.init(layout.root())?;
        info!("Repository initialized");

        for file in created_files {
            if let Err(e) = self.vcs.stage(layout.root(), file) {
                warn!(file = %file, error = %e, "Failed to stage file");
            }
        }
        Ok(())
    }
}
