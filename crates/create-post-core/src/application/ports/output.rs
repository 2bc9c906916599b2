//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from external systems.
//! The `create-post-adapters` crate provides implementations; the CLI
//! provides the terminal [`Reporter`].

use std::path::Path;

use crate::error::PostResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `create_post_adapters::filesystem::LocalFilesystem` (production)
/// - `create_post_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Existing segments are
    /// not an error.
    fn create_dir_all(&self, path: &Path) -> PostResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> PostResult<()>;
}

/// Port for the template resource.
///
/// Implemented by:
/// - `create_post_adapters::template::EmbeddedTemplate` (ships in the binary)
/// - `create_post_adapters::template::FileTemplate` (user-supplied path)
pub trait TemplateSource: Send + Sync {
    /// Read the raw template text.
    fn load(&self) -> PostResult<String>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Port for the code formatter.
///
/// Implementations must be idempotent: formatting already formatted text
/// returns it unchanged.
pub trait Formatter: Send + Sync {
    fn format(&self, text: &str) -> PostResult<String>;
}

/// What the intro block shows about the post being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSummary<'a> {
    pub name: &'a str,
    pub dir: &'a Path,
    pub desk: &'a str,
    pub date: &'a str,
}

/// Port for user-facing progress messages.
///
/// Rendering is the implementor's business; the core only says what
/// happened. Output failures are the implementor's to swallow or log.
pub trait Reporter {
    /// The run is starting.
    fn intro(&self, summary: &PostSummary<'_>);

    /// A milestone completed.
    fn step_done(&self, message: &str);

    /// Something went wrong but the run continues.
    fn warning(&self, message: &str);

    /// The run finished successfully.
    fn conclusion(&self);

    /// The run failed.
    fn error(&self, message: &str);
}
