//! create-post Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `create-post` scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         create-post-cli (CLI)           │
//! │   (clap, logging, TerminalReporter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (Preflight, ScaffoldPipeline)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateSource, Formatter, │
//! │  Reporter)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   create-post-adapters (Infrastructure) │
//! │ (LocalFilesystem, EmbeddedTemplate,     │
//! │  ConfigResolver, MarkdownPrettifier)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PostConfig, PostName, ScaffoldTarget,  │
//! │  RenderContext)                         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use create_post_core::prelude::*;
//!
//! let config = PostConfig::resolve(PostConfig::defaults(today), global, local, cli);
//! let pipeline = ScaffoldPipeline::new(filesystem, template, formatter, &reporter);
//! pipeline.run(Some("hello-world"), &config)?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, Preflight, PreflightOutcome, STEP_SAVED, ScaffoldPipeline, ScaffoldReport,
        ports::{Filesystem, Formatter, PostSummary, Reporter, TemplateSource},
    };
    pub use crate::domain::{
        ConfigLayer, DomainError, EndOfLine, FormatterConfig, OptionalResource, Placeholder,
        PostConfig, PostName, RenderContext, ScaffoldTarget, Stage,
    };
    pub use crate::error::{ErrorCategory, PipelineFailure, PostError, PostResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
