//! Infrastructure adapters for Groundwork.
//!
//! This crate implements the ports defined in
//! `groundwork-core::application::ports`. It contains all external
//! dependencies, I/O, and subprocess invocations.

pub mod filesystem;
pub mod templates;
pub mod tools;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::{DirTemplateSource, EmbeddedTemplateSource};
pub use tools::{GitVersionControl, PythonVenvProvisioner};
