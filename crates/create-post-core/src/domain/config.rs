//! Configuration layers and the merge that produces the effective config.
//!
//! Layers are plain data; reading them from disk happens in the adapters
//! crate. Precedence, lowest first:
//!
//! | Layer   | Source                              |
//! |---------|-------------------------------------|
//! | default | [`PostConfig::defaults`]            |
//! | global  | `~/.create-post-config.json`        |
//! | local   | `{cwd}/.create-post-config.json`    |
//! | cli     | command-line flags                  |
//!
//! Merging is key by key: a layer that sets only `desk` leaves every other
//! key as the layers below resolved it.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::FormatterConfig;

pub const DEFAULT_DESK: &str = "News";
pub const DEFAULT_DIR: &str = "src/content";
pub const DEFAULT_EXTENSION: &str = "mdx";

/// `DD-MM-YYYY`, both fields zero-padded.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// File name looked up in the home directory and the working directory.
pub const CONFIG_FILE_NAME: &str = ".create-post-config.json";

/// One optional override layer. Every key may be absent.
///
/// Unknown keys in the source JSON are ignored; a known key with the wrong
/// JSON type fails deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLayer {
    pub desk: Option<String>,
    pub dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub date: Option<String>,
    pub prettier_config: Option<FormatterConfig>,
    pub template: Option<PathBuf>,
}

impl ConfigLayer {
    /// Overwrite every key that `other` sets.
    pub fn merge_from(&mut self, other: ConfigLayer) {
        if other.desk.is_some() {
            self.desk = other.desk;
        }
        if other.dir.is_some() {
            self.dir = other.dir;
        }
        if other.extension.is_some() {
            self.extension = other.extension;
        }
        if other.date.is_some() {
            self.date = other.date;
        }
        if other.prettier_config.is_some() {
            self.prettier_config = other.prettier_config;
        }
        if other.template.is_some() {
            self.template = other.template;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The effective configuration for one run. Read-only once resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConfig {
    pub desk: String,
    pub dir: PathBuf,
    pub extension: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prettier_config: Option<FormatterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl PostConfig {
    /// Built-in defaults, dated `today`.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            desk: DEFAULT_DESK.into(),
            dir: PathBuf::from(DEFAULT_DIR),
            extension: DEFAULT_EXTENSION.into(),
            date: format_date(today),
            prettier_config: None,
            template: None,
        }
    }

    /// Merge the override layers onto `defaults` in precedence order.
    pub fn resolve(
        defaults: PostConfig,
        global: Option<ConfigLayer>,
        local: Option<ConfigLayer>,
        cli: Option<ConfigLayer>,
    ) -> Self {
        let mut overrides = ConfigLayer::default();
        for layer in [global, local, cli].into_iter().flatten() {
            overrides.merge_from(layer);
        }

        let ConfigLayer {
            desk,
            dir,
            extension,
            date,
            prettier_config,
            template,
        } = overrides;

        Self {
            desk: desk.unwrap_or(defaults.desk),
            dir: dir.unwrap_or(defaults.dir),
            extension: extension.unwrap_or(defaults.extension),
            date: date.unwrap_or(defaults.date),
            prettier_config: prettier_config.or(defaults.prettier_config),
            template: template.or(defaults.template),
        }
    }
}

/// Render a date the way the `DATE_TODAY` placeholder expects it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn layer(json: &str) -> ConfigLayer {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn date_is_zero_padded() {
        assert_eq!(format_date(day()), "07-03-2024");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()),
            "25-12-2023"
        );
    }

    #[test]
    fn no_layers_gives_defaults() {
        let cfg = PostConfig::resolve(PostConfig::defaults(day()), None, None, None);
        assert_eq!(cfg, PostConfig::defaults(day()));
        assert_eq!(cfg.desk, "News");
        assert_eq!(cfg.dir, PathBuf::from("src/content"));
        assert_eq!(cfg.extension, "mdx");
        assert_eq!(cfg.date, "07-03-2024");
        assert!(cfg.prettier_config.is_none());
    }

    #[test]
    fn global_overrides_defaults() {
        let cfg = PostConfig::resolve(
            PostConfig::defaults(day()),
            Some(layer(r#"{"desk": "Sport"}"#)),
            None,
            None,
        );
        assert_eq!(cfg.desk, "Sport");
        assert_eq!(cfg.extension, "mdx");
    }

    #[test]
    fn local_overrides_global_key_by_key() {
        let cfg = PostConfig::resolve(
            PostConfig::defaults(day()),
            Some(layer(r#"{"desk": "Sport", "extension": "md"}"#)),
            Some(layer(r#"{"desk": "Culture"}"#)),
            None,
        );
        assert_eq!(cfg.desk, "Culture");
        // untouched by the local layer, so the global value survives
        assert_eq!(cfg.extension, "md");
        assert_eq!(cfg.dir, PathBuf::from("src/content"));
    }

    #[test]
    fn cli_has_final_say() {
        let cli = ConfigLayer {
            desk: Some("Opinion".into()),
            ..ConfigLayer::default()
        };
        let cfg = PostConfig::resolve(
            PostConfig::defaults(day()),
            Some(layer(r#"{"desk": "Sport"}"#)),
            Some(layer(r#"{"desk": "Culture", "dir": "posts"}"#)),
            Some(cli),
        );
        assert_eq!(cfg.desk, "Opinion");
        assert_eq!(cfg.dir, PathBuf::from("posts"));
    }

    #[test]
    fn every_key_can_come_from_any_layer() {
        let cfg = PostConfig::resolve(
            PostConfig::defaults(day()),
            Some(layer(r#"{"date": "01-01-2000", "template": "tpl.mdx"}"#)),
            Some(layer(r#"{"prettierConfig": {"tabWidth": 4}}"#)),
            None,
        );
        assert_eq!(cfg.date, "01-01-2000");
        assert_eq!(cfg.template, Some(PathBuf::from("tpl.mdx")));
        assert_eq!(cfg.prettier_config.map(|p| p.tab_width), Some(4));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let l = layer(r#"{"desk": "Sport", "colour": "blue"}"#);
        assert_eq!(l.desk.as_deref(), Some("Sport"));
    }

    #[test]
    fn wrong_type_fails_to_parse() {
        assert!(serde_json::from_str::<ConfigLayer>(r#"{"desk": 5}"#).is_err());
    }

    #[test]
    fn merge_from_skips_unset_keys() {
        let mut base = layer(r#"{"desk": "Sport", "dir": "a"}"#);
        base.merge_from(layer(r#"{"dir": "b"}"#));
        assert_eq!(base.desk.as_deref(), Some("Sport"));
        assert_eq!(base.dir, Some(PathBuf::from("b")));
    }

    #[test]
    fn empty_layer_reports_empty() {
        assert!(ConfigLayer::default().is_empty());
        assert!(!layer(r#"{"desk": "x"}"#).is_empty());
    }
}
