//! Placeholder substitution.
//!
//! A template is opaque text containing zero or more of three literal tokens:
//!
//! | Token        | Replaced with   |
//! |--------------|-----------------|
//! | `POST_TITLE` | the post name   |
//! | `DATE_TODAY` | the date string |
//! | `POST_DESK`  | the desk label  |
//!
//! Substitution is a single left-to-right scan of the original text. Values
//! are appended to the output and never scanned again, so a desk named
//! `DATE_TODAY` is written literally. Anything that is not one of these tokens
//! is copied through untouched.

use crate::domain::{PostConfig, PostName};

/// A recognised placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Title,
    Date,
    Desk,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Self::Title, Self::Date, Self::Desk];

    /// The literal text matched in a template.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Title => "POST_TITLE",
            Self::Date => "DATE_TODAY",
            Self::Desk => "POST_DESK",
        }
    }
}

/// Values substituted into the template for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    post_name: String,
    desk: String,
    date: String,
}

impl RenderContext {
    pub fn new(
        post_name: impl Into<String>,
        desk: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            post_name: post_name.into(),
            desk: desk.into(),
            date: date.into(),
        }
    }

    pub fn from_config(name: &PostName, config: &PostConfig) -> Self {
        Self::new(name.as_str(), config.desk.as_str(), config.date.as_str())
    }

    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Title => &self.post_name,
            Placeholder::Date => &self.date,
            Placeholder::Desk => &self.desk,
        }
    }

    /// Replace every placeholder occurrence in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some((at, placeholder)) = next_placeholder(rest) {
            output.push_str(&rest[..at]);
            output.push_str(self.value(placeholder));
            rest = &rest[at + placeholder.token().len()..];
        }
        output.push_str(rest);

        output
    }
}

/// Earliest placeholder in `text`. No token is a prefix of another, so at
/// most one can start at any given offset.
fn next_placeholder(text: &str) -> Option<(usize, Placeholder)> {
    Placeholder::ALL
        .iter()
        .filter_map(|p| text.find(p.token()).map(|at| (at, *p)))
        .min_by_key(|(at, _)| *at)
}
