//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "bootstrap a project".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldOptions, ScaffoldReport, ScaffoldService};
