//! Command handlers.
//!
//! Each submodule exposes a single `execute` function. Handlers own the
//! translation between CLI arguments and core/application types; no argument
//! parsing happens here.

pub mod completions;
pub mod new;
