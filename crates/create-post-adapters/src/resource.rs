//! Reading JSON files that are allowed to be missing.

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;
use tracing::debug;

use create_post_core::domain::OptionalResource;

/// Read and deserialise `path`.
///
/// A file that does not exist is [`OptionalResource::Absent`]. A file that
/// exists but cannot be read, or does not deserialise into `T`, is
/// [`OptionalResource::Invalid`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> OptionalResource<T> {
    match fs::read_to_string(path) {
        Ok(text) => parse_json(path, &text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Optional file absent");
            OptionalResource::Absent
        }
        Err(e) => OptionalResource::Invalid {
            path: path.to_path_buf(),
            reason: format!("could not read file: {e}"),
        },
    }
}

/// Deserialise already-read text; `path` is only used in the error.
pub fn parse_json<T: DeserializeOwned>(path: &Path, text: &str) -> OptionalResource<T> {
    match serde_json::from_str(text) {
        Ok(value) => OptionalResource::Present(value),
        Err(e) => OptionalResource::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}
