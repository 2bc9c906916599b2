//! Preflight checks - everything that must hold before the first write.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. a post name was supplied
//! 2. the parent directory exists
//! 3. the component directory does not
//!
//! Only the filesystem port's `exists` is consulted; nothing is mutated.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, PostName, ScaffoldTarget},
    error::PostResult,
};

/// Result of the two filesystem checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightOutcome {
    Ok,
    MissingParent,
    AlreadyExists,
}

/// Validator for one run's name and target paths.
pub struct Preflight<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Preflight<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Check 1: the name.
    pub fn check_name(raw: Option<&str>) -> Result<PostName, DomainError> {
        PostName::parse(raw)
    }

    /// Checks 2 and 3: parent present, component absent. The parent check
    /// wins when both fail.
    pub fn check_paths(&self, parent_dir: &Path, component_dir: &Path) -> PreflightOutcome {
        if !self.filesystem.exists(parent_dir) {
            return PreflightOutcome::MissingParent;
        }
        if self.filesystem.exists(component_dir) {
            return PreflightOutcome::AlreadyExists;
        }
        PreflightOutcome::Ok
    }

    /// [`Self::check_paths`] for a derived target, as an error.
    pub fn check_target(&self, target: &ScaffoldTarget) -> PostResult<()> {
        let outcome = self.check_paths(target.parent_dir(), target.component_dir());
        debug!(?outcome, parent = %target.parent_dir().display(), "Preflight checked");

        match outcome {
            PreflightOutcome::Ok => Ok(()),
            PreflightOutcome::MissingParent => Err(ApplicationError::MissingParentDirectory {
                path: target.parent_dir().to_path_buf(),
            }
            .into()),
            PreflightOutcome::AlreadyExists => Err(ApplicationError::PostExists {
                path: target.component_dir().to_path_buf(),
            }
            .into()),
        }
    }
}
