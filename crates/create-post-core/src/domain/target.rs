//! Paths derived for one scaffold run.

use std::path::{Path, PathBuf};

use crate::domain::{PostConfig, PostName};

/// Where the post goes.
///
/// ```text
/// {dir}/                         parent_dir     (must exist)
/// {dir}/{name}/                  component_dir  (must not exist)
/// {dir}/{name}/{name}.{ext}      file_path
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget {
    parent_dir: PathBuf,
    component_dir: PathBuf,
    file_path: PathBuf,
}

impl ScaffoldTarget {
    pub fn new(config: &PostConfig, name: &PostName) -> Self {
        let parent_dir = config.dir.clone();
        let component_dir = parent_dir.join(name.as_str());

        let extension = config.extension.trim_start_matches('.');
        let file_name = if extension.is_empty() {
            name.to_string()
        } else {
            format!("{name}.{extension}")
        };
        let file_path = component_dir.join(file_name);

        Self {
            parent_dir,
            component_dir,
            file_path,
        }
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    pub fn component_dir(&self) -> &Path {
        &self.component_dir
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn config() -> PostConfig {
        PostConfig::defaults(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn name(raw: &str) -> PostName {
        PostName::parse(Some(raw)).unwrap()
    }

    #[test]
    fn default_layout() {
        let target = ScaffoldTarget::new(&config(), &name("hello-world"));
        assert_eq!(target.parent_dir(), Path::new("src/content"));
        assert_eq!(target.component_dir(), Path::new("src/content/hello-world"));
        assert_eq!(
            target.file_path(),
            Path::new("src/content/hello-world/hello-world.mdx")
        );
    }

    #[test]
    fn leading_dot_in_extension_is_not_doubled() {
        let mut cfg = config();
        cfg.extension = ".md".into();
        let target = ScaffoldTarget::new(&cfg, &name("launch"));
        assert_eq!(target.file_path(), Path::new("src/content/launch/launch.md"));
    }

    #[test]
    fn empty_extension_gives_bare_file_name() {
        let mut cfg = config();
        cfg.extension = String::new();
        let target = ScaffoldTarget::new(&cfg, &name("launch"));
        assert_eq!(target.file_path(), Path::new("src/content/launch/launch"));
    }
}
