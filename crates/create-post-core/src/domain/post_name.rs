//! Validated post name.

use std::fmt;

use crate::domain::DomainError;

/// A post name that is safe to use as a single path segment.
///
/// Construction is the only place the rules live:
/// - absent or whitespace-only input is [`DomainError::MissingPostName`]
/// - `.`/`..` and anything with a path separator is rejected, since the name
///   becomes both the component directory and the file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostName(String);

impl PostName {
    /// Validate an optional raw name as supplied on the command line.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let name = raw.map(str::trim).unwrap_or_default();

        if name.is_empty() {
            return Err(DomainError::MissingPostName);
        }
        if name == "." || name == ".." {
            return Err(DomainError::InvalidPostName {
                name: name.into(),
                reason: "name cannot be a relative directory reference".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidPostName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
