use thiserror::Error;

/// Errors raised by pure domain rules.
///
/// These never involve I/O: they are violations the user can fix by changing
/// the arguments they pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("You need to specify a name for your post")]
    MissingPostName,

    #[error("Invalid post name '{name}': {reason}")]
    InvalidPostName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingPostName => vec![
                "Pass the post name as the first argument".into(),
                "Example: create-post <name>".into(),
            ],
            Self::InvalidPostName { name, .. } => vec![
                format!("'{name}' cannot be used as a directory name"),
                "Use a plain slug such as: hello-world".into(),
            ],
        }
    }
}
