//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

use create_post_core::domain::ConfigLayer;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-post",
    bin_name = "create-post",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a new post from a template",
    long_about = "create-post writes {dir}/{name}/{name}.{extension} from a template, \
                  filling in the post title, desk and date.\n\n\
                  Defaults can be overridden in ~/.create-post-config.json and \
                  ./.create-post-config.json; flags override both.",
    after_help = "EXAMPLES:\n\
        \x20 create-post hello-world\n\
        \x20 create-post launch-day --desk Sport\n\
        \x20 create-post recap --dir posts --extension md --no-format\n\
        \x20 create-post --show-config",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub post: PostArgs,
}

/// What to scaffold, and the CLI config layer.
#[derive(Debug, Clone, Default, Args)]
pub struct PostArgs {
    /// Name of the post. Used as both directory and file name.
    ///
    /// Optional at the parser level so that a missing name is reported with
    /// the same remedy message as the other preflight failures.
    #[arg(value_name = "POST_NAME", help = "Name of the post to create")]
    pub name: Option<String>,

    #[arg(
        short = 'd',
        long = "desk",
        value_name = "DESK",
        help = "Desk tag for the post (default: \"News\")"
    )]
    pub desk: Option<String>,

    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Directory the post folder is created in (default: src/content)"
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long = "extension",
        value_name = "EXT",
        help = "File extension of the post (default: mdx)"
    )]
    pub extension: Option<String>,

    #[arg(
        long = "date",
        value_name = "DATE",
        help = "Date written into the post (default: today, DD-MM-YYYY)"
    )]
    pub date: Option<String>,

    #[arg(
        long = "template",
        value_name = "FILE",
        help = "Template file to use instead of the built-in one"
    )]
    pub template: Option<PathBuf>,

    /// Skip the formatting stage.
    #[arg(long = "no-format", help = "Write the rendered template unformatted")]
    pub no_format: bool,

    /// Print the effective configuration and exit.
    #[arg(
        long = "show-config",
        help = "Print the resolved configuration as JSON and exit"
    )]
    pub show_config: bool,
}

impl PostArgs {
    /// The highest-precedence config layer: whatever flags were passed.
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            desk: self.desk.clone(),
            dir: self.dir.clone(),
            extension: self.extension.clone(),
            date: self.date.clone(),
            prettier_config: None,
            template: self.template.clone(),
        }
    }
}
