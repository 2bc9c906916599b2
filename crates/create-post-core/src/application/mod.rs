//! Application layer for create-post.
//!
//! This layer contains:
//! - **Services**: the preflight validator and the scaffold pipeline
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the rules themselves
//! (merge order, name validity, placeholder substitution) live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{Preflight, PreflightOutcome, STEP_SAVED, ScaffoldPipeline, ScaffoldReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Formatter, PostSummary, Reporter, TemplateSource};

pub use error::ApplicationError;
