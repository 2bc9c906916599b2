//! Outcome of reading a file that is allowed to be missing.

use std::path::PathBuf;

/// Distinguishes "not there" from "there but unusable".
///
/// Callers decide per resource what `Invalid` means: the config layers turn
/// it into a hard error, the formatter config into a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionalResource<T> {
    /// No file at the path.
    Absent,
    /// The file exists but could not be read or parsed.
    Invalid { path: PathBuf, reason: String },
    Present(T),
}
