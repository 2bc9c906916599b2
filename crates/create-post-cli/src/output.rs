//! Terminal implementation of the [`Reporter`] port.
//!
//! Progress (intro, step, conclusion) goes to stdout; warnings and errors go
//! to stderr. Quiet mode silences everything except errors.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::debug;

use create_post_core::application::ports::{PostSummary, Reporter};

use crate::cli::GlobalArgs;

const GOLD: (u8, u8, u8) = (255, 204, 0);
const GREEN: (u8, u8, u8) = (142, 215, 0);
const BLUE: (u8, u8, u8) = (0, 186, 255);
const RED: (u8, u8, u8) = (216, 16, 16);
const DARK_GRAY: (u8, u8, u8) = (90, 90, 90);

const RULE: &str = "=========================================";

/// Colourised progress output for one run.
pub struct TerminalReporter {
    quiet: bool,
    no_color: bool,
    out: Term,
    err: Term,
}

impl TerminalReporter {
    /// Colour is disabled by `--no-color`/`NO_COLOR` or when stdout is not a
    /// terminal.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || !io::stdout().is_terminal(),
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Print `text` on stderr with no decoration. Used for the suggestion
    /// block that follows an error.
    pub fn details(&self, text: &str) {
        write(&self.err, text);
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        match (self.no_color, bold) {
            (true, _) => text.to_owned(),
            (false, true) => text.truecolor(r, g, b).bold().to_string(),
            (false, false) => text.truecolor(r, g, b).to_string(),
        }
    }

    fn intro_lines(&self, summary: &PostSummary<'_>) -> Vec<String> {
        vec![
            String::new(),
            format!(
                "\u{2728}  Creating the {} post \u{2728}",
                self.paint(summary.name, GOLD, true)
            ),
            String::new(),
            format!(
                "Directory:  {}",
                self.paint(&summary.dir.display().to_string(), BLUE, true)
            ),
            format!("Desk:       {}", self.paint(summary.desk, BLUE, true)),
            format!("Date:       {}", self.paint(summary.date, BLUE, true)),
            self.paint(RULE, DARK_GRAY, false),
            String::new(),
        ]
    }
}

/// Output failures are not worth failing a run over.
fn write(term: &Term, text: &str) {
    if let Err(e) = term.write_line(text) {
        debug!(error = %e, "Terminal write failed");
    }
}

impl Reporter for TerminalReporter {
    fn intro(&self, summary: &PostSummary<'_>) {
        if self.quiet {
            return;
        }
        for line in self.intro_lines(summary) {
            write(&self.out, &line);
        }
    }

    fn step_done(&self, message: &str) {
        if self.quiet {
            return;
        }
        write(
            &self.out,
            &format!("{} {message}", self.paint("\u{2713}", GREEN, false)),
        );
    }

    fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = if self.no_color {
            format!("\u{26a0} {message}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), message.yellow())
        };
        write(&self.err, &line);
    }

    fn conclusion(&self) {
        if self.quiet {
            return;
        }
        write(&self.out, "");
        write(
            &self.out,
            &self.paint("Post created! \u{1f389}", GREEN, true),
        );
        write(&self.out, "");
    }

    /// Never suppressed: errors must always be visible.
    fn error(&self, message: &str) {
        write(&self.err, "");
        write(&self.err, &self.paint("Error creating post.", RED, true));
        write(&self.err, &self.paint(message, RED, false));
    }
}
