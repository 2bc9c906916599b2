//! Infrastructure adapters for create-post.
//!
//! This crate implements the ports defined in
//! `create_post_core::application::ports` and owns every read from disk:
//! config layers, `.prettierrc`, and the template resource.

pub mod config;
pub mod filesystem;
pub mod prettifier;
pub mod resource;
pub mod template;

// Re-export commonly used adapters
pub use config::ConfigResolver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prettifier::MarkdownPrettifier;
pub use template::{EmbeddedTemplate, FileTemplate};
