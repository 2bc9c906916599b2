//! The `create-post <name>` command.
//!
//! Wires the adapters into a [`ScaffoldPipeline`] and runs it once. All
//! errors are returned to `main`, which owns the single reporting path.

use console::Term;
use tracing::{info, instrument};

use create_post_adapters::{
    ConfigResolver, EmbeddedTemplate, FileTemplate, LocalFilesystem, MarkdownPrettifier,
};
use create_post_core::{
    application::{
        ScaffoldPipeline,
        ports::{Formatter, Reporter, TemplateSource},
    },
    domain::PostConfig,
    error::PostError,
};

use crate::{
    cli::PostArgs,
    error::{CliResult, IntoCli},
};

#[instrument(skip_all)]
pub fn execute(args: &PostArgs, reporter: &dyn Reporter) -> CliResult<()> {
    let resolver = ConfigResolver::from_env()?;
    let config = resolver.resolve(Some(args.overrides()))?;

    if args.show_config {
        return show_config(&config);
    }

    let template: Box<dyn TemplateSource> = match &config.template {
        Some(path) => Box::new(FileTemplate::relative_to(resolver.cwd(), path)),
        None => Box::new(EmbeddedTemplate),
    };

    let formatter: Option<Box<dyn Formatter>> = if args.no_format {
        None
    } else {
        Some(Box::new(MarkdownPrettifier::build(
            config.prettier_config,
            resolver.cwd(),
            reporter,
        )))
    };

    let pipeline = ScaffoldPipeline::new(
        Box::new(LocalFilesystem::new()),
        template,
        formatter,
        reporter,
    );
    let report = pipeline.run(args.name.as_deref(), &config)?;

    info!(
        path = %report.file_path.display(),
        formatted = report.formatted,
        "Post created"
    );
    Ok(())
}

fn show_config(config: &PostConfig) -> CliResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| PostError::Internal {
        message: format!("could not serialise configuration: {e}"),
    })?;
    Term::stdout()
        .write_line(&json)
        .with_cli_context(|| "printing configuration")
}
