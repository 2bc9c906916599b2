//! Application layer errors.
//!
//! These errors represent failures while talking to the outside world:
//! filesystem state, the template resource, config files and the formatter.
//! Name rules are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during pipeline orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The base output directory is missing.
    #[error("You need to create a parent directory (looking for a directory at {path})")]
    MissingParentDirectory { path: PathBuf },

    /// A post with this name already exists.
    #[error("Looks like this post already exists! There's already a post at {path}")]
    PostExists { path: PathBuf },

    /// The template resource could not be loaded.
    #[error("Template unavailable at {path}: {reason}")]
    TemplateUnavailable { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A config file exists but is not valid JSON for its schema.
    #[error("Could not parse {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// The formatter rejected the rendered text.
    #[error("Formatting failed: {reason}")]
    FormatFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingParentDirectory { path } => vec![
                format!("Create it first: mkdir -p {}", path.display()),
                "Or point `dir` in .create-post-config.json at an existing directory".into(),
            ],
            Self::PostExists { path } => vec![
                format!("Please delete {} and try again", path.display()),
                "Or choose a different post name".into(),
            ],
            Self::TemplateUnavailable { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Remove the `template` setting to use the built-in template".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "Config files must be a flat JSON object, e.g. {\"desk\": \"News\"}".into(),
            ],
            Self::FormatFailed { .. } => vec!["The post was written unformatted".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingParentDirectory { .. } | Self::PostExists { .. } => {
                ErrorCategory::UserInput
            }
            Self::ConfigParse { .. } => ErrorCategory::ConfigParse,
            Self::TemplateUnavailable { .. } | Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::FormatFailed { .. } => ErrorCategory::Format,
        }
    }
}
