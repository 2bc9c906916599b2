//! Template resource adapters.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use create_post_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::PostResult,
};

/// The template that ships inside the binary.
const BUILTIN_TEMPLATE: &str = include_str!("../templates/post.mdx");

/// Built-in template. Always loads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplate;

impl TemplateSource for EmbeddedTemplate {
    fn load(&self) -> PostResult<String> {
        Ok(BUILTIN_TEMPLATE.to_owned())
    }

    fn describe(&self) -> String {
        "built-in post.mdx".into()
    }
}

/// A user-supplied template file.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    path: PathBuf,
}

impl FileTemplate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `path` joined onto `base` unless it is already absolute.
    pub fn relative_to(base: &Path, path: &Path) -> Self {
        Self::new(base.join(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TemplateSource for FileTemplate {
    fn load(&self) -> PostResult<String> {
        debug!(path = %self.path.display(), "Reading template");
        fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::TemplateUnavailable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use create_post_core::{domain::Placeholder, error::PostError};

    use super::*;

    #[test]
    fn builtin_template_uses_every_placeholder() {
        let text = EmbeddedTemplate.load().unwrap();
        for placeholder in Placeholder::ALL {
            assert!(text.contains(placeholder.token()), "{:?}", placeholder);
        }
    }

    #[test]
    fn file_template_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("tpl.md");
        fs::write(&path, "# POST_TITLE\n").unwrap();

        assert_eq!(FileTemplate::new(&path).load().unwrap(), "# POST_TITLE\n");
    }

    #[test]
    fn missing_file_is_template_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = FileTemplate::new(tmp.path().join("gone.mdx"))
            .load()
            .unwrap_err();

        assert!(matches!(
            err,
            PostError::Application(ApplicationError::TemplateUnavailable { .. })
        ));
    }

    #[test]
    fn relative_paths_join_base_absolute_paths_do_not() {
        let base = Path::new("/work/site");
        assert_eq!(
            FileTemplate::relative_to(base, Path::new("tpl/post.mdx")).path(),
            Path::new("/work/site/tpl/post.mdx")
        );
        assert_eq!(
            FileTemplate::relative_to(base, Path::new("/etc/post.mdx")).path(),
            Path::new("/etc/post.mdx")
        );
    }
}
