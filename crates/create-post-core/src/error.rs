//! Unified error handling for create-post core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a category used for exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, Stage};

/// Root error type for create-post core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    /// Errors from the domain layer (bad post name).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, config, template).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PostError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in create-post".into()],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::UserInput,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories, one per recovery strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing name, missing parent directory, post already exists.
    UserInput,
    /// A config file is present but malformed.
    ConfigParse,
    /// Template unreadable, directory or file write failed.
    Io,
    /// The formatter rejected the text. Recovered inside the pipeline.
    Format,
    Internal,
}

/// Convenient result type alias.
pub type PostResult<T> = Result<T, PostError>;

/// A pipeline run that ended in the FAILED state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{} failed: {error}", .stage.activity())]
pub struct PipelineFailure {
    /// The state the pipeline was leaving when it failed.
    pub stage: Stage,
    #[source]
    pub error: PostError,
}

impl PipelineFailure {
    pub fn new(stage: Stage, error: impl Into<PostError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}
