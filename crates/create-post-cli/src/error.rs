//! CLI error type and exit-code mapping.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions (delegated to the core error)
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use create_post_core::error::{ErrorCategory, PipelineFailure, PostError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Failed before the pipeline started (config resolution).
    #[error(transparent)]
    Core(#[from] PostError),

    /// The pipeline ended in its FAILED state.
    #[error(transparent)]
    Pipeline(#[from] PipelineFailure),

    /// Writing CLI output failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// The core error behind this failure, if any.
    pub fn core(&self) -> Option<&PostError> {
        match self {
            Self::Core(e) => Some(e),
            Self::Pipeline(failure) => Some(&failure.error),
            Self::IoError { .. } => None,
        }
    }

    /// Message shown under the error header. For a pipeline failure the
    /// stage is left to the logs; the user only needs the reason.
    pub fn user_message(&self) -> String {
        match self {
            Self::Pipeline(failure) => failure.error.to_string(),
            other => other.to_string(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check that stdout is writable".into(),
            ],
            other => other.core().map(PostError::suggestions).unwrap_or_default(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.core()
            .map(PostError::category)
            .unwrap_or(ErrorCategory::Io)
    }

    /// Exit code to pass to the OS.
    ///
    /// A user-input failure ends the run but not as a crash: the remediation
    /// message is the whole outcome, so the process exits cleanly.
    ///
    /// | Category        | Code |
    /// |-----------------|------|
    /// | User input      |  0   |
    /// | Config parse    |  4   |
    /// | I/O, internal   |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserInput => 0,
            ErrorCategory::ConfigParse => 4,
            ErrorCategory::Io | ErrorCategory::Format | ErrorCategory::Internal => 1,
        }
    }

    /// Everything printed after the error header: cause chain when verbose,
    /// suggestions, and the hint to re-run with `-v`.
    pub fn details(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                if color {
                    out.push_str(&format!("  {} {}\n", "→".dimmed(), err.to_string().dimmed()));
                } else {
                    out.push_str(&format!("  Caused by: {err}\n"));
                }
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if color {
                out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            if color {
                out.push_str(&format!(
                    "{} {}\n",
                    "\u{2139}".blue(),
                    "Use -v / --verbose for more details.".dimmed()
                ));
            } else {
                out.push_str("Use -v / --verbose for more details.\n");
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserInput => tracing::info!("User error: {}", self),
            ErrorCategory::ConfigParse => tracing::error!("Configuration error: {}", self),
            _ => tracing::error!("Error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Extension trait to convert `std::io` results into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
