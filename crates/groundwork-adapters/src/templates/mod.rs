//! Template sources: where template assets come from.

pub mod dir_source;
pub mod embedded;

pub use dir_source::DirTemplateSource;
pub use embedded::EmbeddedTemplateSource;
