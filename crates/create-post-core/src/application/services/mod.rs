//! Application services - orchestrate use cases.
//!
//! The preflight validator guards the filesystem, the pipeline sequences
//! validate → render → format → write.

pub mod pipeline;
pub mod preflight;

pub use pipeline::{STEP_SAVED, ScaffoldPipeline, ScaffoldReport};
pub use preflight::{Preflight, PreflightOutcome};
