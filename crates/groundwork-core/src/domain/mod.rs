//! Core domain layer for Groundwork.
//!
//! This module contains pure business logic: validated project names, the
//! fixed project layout, the placeholder replacement map, and template
//! assets. All I/O and external-tool concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod error;
pub mod layout;
pub mod project_name;
pub mod replacements;
pub mod template;

// Re-exports for convenience
pub use error::DomainError;
pub use layout::{PROJECT_SUBDIRS, ProjectLayout};
pub use project_name::ProjectName;
pub use replacements::ReplacementMap;
pub use template::{TEMPLATE_SUFFIX, TemplateAsset};
