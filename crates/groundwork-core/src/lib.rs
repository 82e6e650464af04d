//! Domain and application layers for the Groundwork project bootstrap tool.
//!
//! Everything here is pure: I/O and subprocesses sit behind the port traits
//! in [`application::ports`] and are implemented by `groundwork-adapters`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        groundwork-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, TemplateSource, EnvProv,  │
//! │           VersionControl)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   groundwork-adapters (Infrastructure)  │
//! │  (LocalFilesystem, DirTemplateSource,   │
//! │   PythonVenvProvisioner, Git, ...)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectName, ReplacementMap, Layout)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use groundwork_core::{
//!     application::{ScaffoldOptions, ScaffoldService},
//!     domain::ProjectName,
//! };
//!
//! // 1. Validate the project name
//! let name: ProjectName = "my-project".parse().unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! # fn adapters() -> groundwork_core::application::ScaffoldService { unimplemented!() }
//! let service = adapters();
//! let report = service
//!     .scaffold(&name, Path::new("."), &ScaffoldOptions::default())
//!     .unwrap();
//! println!("created {} files", report.created_files.len());
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// One-stop imports for downstream crates.
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldReport, ScaffoldService,
        ports::{EnvironmentProvisioner, Filesystem, TemplateSource, VersionControl},
    };
    pub use crate::domain::{ProjectLayout, ProjectName, ReplacementMap, TemplateAsset};
    pub use crate::error::{GroundworkError, GroundworkResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
