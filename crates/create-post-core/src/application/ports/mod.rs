//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `create-post-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence checks, directory creation, file write
//!   - `TemplateSource`: the template text
//!   - `Formatter`: pretty-printing of the rendered post
//!   - `Reporter`: progress and error messages

pub mod output;

#[cfg(test)]
pub use output::MockFilesystem;
pub use output::{Filesystem, Formatter, PostSummary, Reporter, TemplateSource};
