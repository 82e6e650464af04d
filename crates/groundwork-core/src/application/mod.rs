//! Application layer: use-case orchestration and the ports it depends on.
//!
//! [`ScaffoldService`] is the only use case; it drives the domain types
//! through the port traits. Business rules stay in [`crate::domain`] — this
//! layer just sequences them against the outside world.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{EnvironmentProvisioner, Filesystem, TemplateSource, VersionControl};
pub use services::{ScaffoldOptions, ScaffoldReport, ScaffoldService};
