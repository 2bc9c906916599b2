//! Locating and loading the config override layers.
//!
//! The merge itself is [`PostConfig::resolve`]; this module only decides
//! where the global and project files live and turns each into an optional
//! [`ConfigLayer`].

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use create_post_core::{
    application::ApplicationError,
    domain::{CONFIG_FILE_NAME, ConfigLayer, OptionalResource, PostConfig},
    error::PostResult,
};

use crate::resource::read_json;

/// Resolves the effective config for one run.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    home: Option<PathBuf>,
    cwd: PathBuf,
}

impl ConfigResolver {
    /// Resolver rooted at explicit directories. `home` is `None` on systems
    /// without a home directory; the global layer is then skipped.
    pub fn new(home: Option<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            home,
            cwd: cwd.into(),
        }
    }

    /// Resolver for the running process.
    pub fn from_env() -> PostResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| ApplicationError::FilesystemError {
            path: PathBuf::from("."),
            reason: format!("Failed to read current directory: {e}"),
        })?;
        Ok(Self::new(dirs::home_dir(), cwd))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// `~/.create-post-config.json`
    pub fn global_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(CONFIG_FILE_NAME))
    }

    /// `{cwd}/.create-post-config.json`
    pub fn local_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_FILE_NAME)
    }

    /// Resolve with today's local date as the default `date`.
    pub fn resolve(&self, cli: Option<ConfigLayer>) -> PostResult<PostConfig> {
        self.resolve_on(Local::now().date_naive(), cli)
    }

    /// Resolve with `today` as the default `date`.
    ///
    /// Fails with [`ApplicationError::ConfigParse`] when either override file
    /// exists but is malformed; no partial config is returned.
    #[instrument(skip(self, cli), fields(cwd = %self.cwd.display()))]
    pub fn resolve_on(&self, today: NaiveDate, cli: Option<ConfigLayer>) -> PostResult<PostConfig> {
        let global = match self.global_path() {
            Some(path) => load_layer(&path)?,
            None => {
                debug!("No home directory, skipping global config");
                None
            }
        };
        let local = load_layer(&self.local_path())?;

        let config = PostConfig::resolve(PostConfig::defaults(today), global, local, cli);
        info!(desk = %config.desk, dir = %config.dir.display(), "Config resolved");
        Ok(config)
    }
}

/// Load one override layer. Absent is `None`; malformed is an error.
pub fn load_layer(path: &Path) -> PostResult<Option<ConfigLayer>> {
    match read_json::<ConfigLayer>(path) {
        OptionalResource::Absent => Ok(None),
        OptionalResource::Invalid { path, reason } => {
            Err(ApplicationError::ConfigParse { path, reason }.into())
        }
        OptionalResource::Present(layer) => {
            debug!(path = %path.display(), "Config layer loaded");
            Ok(Some(layer))
        }
    }
}
