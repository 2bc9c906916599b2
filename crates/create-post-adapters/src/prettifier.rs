//! Markdown / MDX prettifier.
//!
//! A line-oriented normaliser configured by the prettier-style
//! [`FormatterConfig`]. It is deliberately conservative: it only touches
//! whitespace and heading markers, so running it twice yields the same text.
//!
//! Rules, in the order they apply:
//!
//! - `\r\n` and lone `\r` become `\n` while processing
//! - YAML front matter (`---` ... `---` at the top) keeps its lines, minus
//!   trailing whitespace; an unclosed block is an error
//! - fenced code blocks (```` ``` ```` or `~~~`) are copied verbatim; an
//!   unclosed fence is an error
//! - everywhere else: trailing whitespace is trimmed, leading indentation is
//!   rewritten per `useTabs`/`tabWidth`, runs of blank lines collapse to one,
//!   and `#   Title` becomes `# Title`
//! - leading and trailing blank lines are dropped and the text ends with
//!   exactly one line terminator

use std::path::Path;

use tracing::{debug, warn};

use create_post_core::{
    application::{
        ApplicationError,
        ports::{Formatter, Reporter},
    },
    domain::{EndOfLine, FormatterConfig, OptionalResource},
    error::{PostError, PostResult},
};

use crate::resource::parse_json;

/// Formatter config file looked up in the working directory.
pub const PRETTIERRC: &str = ".prettierrc";

/// The markdown formatter behind the [`Formatter`] port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownPrettifier {
    config: FormatterConfig,
}

impl MarkdownPrettifier {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Build a prettifier, reading `{cwd}/.prettierrc` when no explicit
    /// config is given.
    ///
    /// A missing or unreadable `.prettierrc` is normal and silently yields the
    /// default config. One that is not valid JSON is reported through
    /// `reporter` as a warning and the default config is used.
    pub fn build(explicit: Option<FormatterConfig>, cwd: &Path, reporter: &dyn Reporter) -> Self {
        if let Some(config) = explicit {
            return Self::new(config);
        }

        let path = cwd.join(PRETTIERRC);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No usable .prettierrc");
                return Self::default();
            }
        };

        match parse_json::<FormatterConfig>(&path, &text) {
            OptionalResource::Present(config) => {
                debug!(path = %path.display(), ?config, "Loaded .prettierrc");
                Self::new(config)
            }
            OptionalResource::Invalid { path, reason } => {
                warn!(path = %path.display(), %reason, "Ignoring malformed .prettierrc");
                reporter.warning(&format!(
                    "Could not parse {}, it does not appear to be JSON ({reason}). \
                     Formatting with default settings.",
                    path.display()
                ));
                Self::default()
            }
            OptionalResource::Absent => Self::default(),
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }
}

impl Formatter for MarkdownPrettifier {
    fn format(&self, text: &str) -> PostResult<String> {
        let eol = match self.config.end_of_line {
            EndOfLine::Lf => "\n",
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Auto => detect_eol(text),
        };

        let normalised = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines = LineFormatter::new(&self.config).run(&normalised)?;

        if lines.is_empty() {
            return Ok(String::new());
        }
        let mut out = lines.join(eol);
        out.push_str(eol);
        Ok(out)
    }
}

/// Terminator of the first line break in `text`, `\n` if there is none.
fn detect_eol(text: &str) -> &'static str {
    match text.find('\n') {
        Some(at) if at > 0 && text.as_bytes()[at - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

struct LineFormatter<'c> {
    config: &'c FormatterConfig,
    out: Vec<String>,
}

impl<'c> LineFormatter<'c> {
    fn new(config: &'c FormatterConfig) -> Self {
        Self {
            config,
            out: Vec::new(),
        }
    }

    fn run(mut self, text: &str) -> PostResult<Vec<String>> {
        let mut lines = text.split('\n').skip_while(|l| l.trim().is_empty()).peekable();

        if lines.peek().is_some_and(|l| l.trim_end() == "---") {
            self.front_matter(&mut lines)?;
        }

        while let Some(line) = lines.next() {
            if let Some(fence) = Fence::open(line) {
                self.code_block(line, fence, &mut lines)?;
            } else {
                self.prose(line);
            }
        }

        while self.out.last().is_some_and(String::is_empty) {
            self.out.pop();
        }
        Ok(self.out)
    }

    fn front_matter<'t>(&mut self, lines: &mut impl Iterator<Item = &'t str>) -> PostResult<()> {
        let mut opened = false;
        for line in lines.by_ref() {
            let line = line.trim_end();
            self.out.push(line.to_owned());
            if line == "---" {
                if opened {
                    return Ok(());
                }
                opened = true;
            }
        }
        Err(format_failed("front matter is not closed with `---`"))
    }

    fn code_block<'t>(
        &mut self,
        opening: &str,
        fence: Fence,
        lines: &mut impl Iterator<Item = &'t str>,
    ) -> PostResult<()> {
        self.out.push(opening.trim_end().to_owned());
        for line in lines.by_ref() {
            if fence.closes(line) {
                self.out.push(line.trim_end().to_owned());
                return Ok(());
            }
            self.out.push(line.to_owned());
        }
        Err(format_failed("code fence is not closed"))
    }

    fn prose(&mut self, line: &str) {
        let line = line.trim_end();
        if line.is_empty() {
            if self.out.last().is_some_and(|l| !l.is_empty()) {
                self.out.push(String::new());
            }
            return;
        }

        let body = line.trim_start();
        let width = indent_width(&line[..line.len() - body.len()], self.config.tab_width);
        let body = if width < 4 { normalise_heading(body) } else { body.to_owned() };

        self.out.push(format!("{}{body}", self.indent(width)));
    }

    fn indent(&self, width: usize) -> String {
        let tab_width = self.config.tab_width.max(1);
        if self.config.use_tabs {
            format!("{}{}", "\t".repeat(width / tab_width), " ".repeat(width % tab_width))
        } else {
            " ".repeat(width)
        }
    }
}

/// Columns occupied by leading whitespace; a tab counts `tab_width`.
fn indent_width(whitespace: &str, tab_width: usize) -> usize {
    whitespace
        .chars()
        .map(|c| if c == '\t' { tab_width.max(1) } else { 1 })
        .sum()
}

/// `#   Title` → `# Title`. Anything that is not an ATX heading is returned
/// unchanged, including `#hashtag`.
fn normalise_heading(body: &str) -> String {
    let hashes = body.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return body.to_owned();
    }
    let rest = &body[hashes..];
    if !rest.starts_with([' ', '\t']) {
        return body.to_owned();
    }
    format!("{} {}", &body[..hashes], rest.trim_start())
}

#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: u8,
    len: usize,
}

impl Fence {
    fn open(line: &str) -> Option<Self> {
        let body = line.trim_start();
        let marker = *body.as_bytes().first()?;
        if marker != b'`' && marker != b'~' {
            return None;
        }
        let len = body.bytes().take_while(|b| *b == marker).count();
        (len >= 3).then_some(Self { marker, len })
    }

    fn closes(&self, line: &str) -> bool {
        let body = line.trim();
        let len = body.bytes().take_while(|b| *b == self.marker).count();
        len >= self.len && len == body.len()
    }
}

fn format_failed(reason: &str) -> PostError {
    ApplicationError::FormatFailed {
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs};

    use create_post_core::{application::ports::PostSummary, error::ErrorCategory};

    use super::*;

    fn pretty(text: &str) -> String {
        MarkdownPrettifier::default().format(text).unwrap()
    }

    #[derive(Default)]
    struct Warnings(RefCell<Vec<String>>);

    impl Reporter for Warnings {
        fn intro(&self, _: &PostSummary<'_>) {}
        fn step_done(&self, _: &str) {}
        fn warning(&self, message: &str) {
            self.0.borrow_mut().push(message.into());
        }
        fn conclusion(&self) {}
        fn error(&self, _: &str) {}
    }

    #[test]
    fn trailing_whitespace_and_blank_runs() {
        assert_eq!(pretty("a   \n\n\n\nb\t\n"), "a\n\nb\n");
    }

    #[test]
    fn leading_and_trailing_blank_lines_dropped() {
        assert_eq!(pretty("\n\n  \n# T\n\n\n"), "# T\n");
    }

    #[test]
    fn heading_spacing_normalised() {
        assert_eq!(pretty("#    Title\n##\tSub"), "# Title\n## Sub\n");
        assert_eq!(pretty("#hashtag\n####### seven"), "#hashtag\n####### seven\n");
    }

    #[test]
    fn tabs_expand_to_spaces_by_default() {
        assert_eq!(pretty("- a\n\t- b"), "- a\n  - b\n");
    }

    #[test]
    fn use_tabs_rewrites_spaces() {
        let p = MarkdownPrettifier::new(FormatterConfig {
            tab_width: 4,
            use_tabs: true,
            ..FormatterConfig::default()
        });
        assert_eq!(p.format("- a\n    - b\n      c").unwrap(), "- a\n\t- b\n\t  c\n");
    }

    #[test]
    fn front_matter_is_kept() {
        let text = "---\ntitle: x  \n\ndesk: News\n---\n\n\n# x\n";
        assert_eq!(pretty(text), "---\ntitle: x\n\ndesk: News\n---\n\n# x\n");
    }

    #[test]
    fn code_blocks_are_verbatim() {
        let text = "```rs\nfn main() {   \n\n\n\tx\n}\n```\n";
        assert_eq!(pretty(text), text);
    }

    #[test]
    fn longer_fence_needs_longer_close() {
        let text = "````\n```\n````\n";
        assert_eq!(pretty(text), text);
    }

    #[test]
    fn unclosed_fence_fails() {
        let err = MarkdownPrettifier::default().format("```\ncode").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn unclosed_front_matter_fails() {
        assert!(MarkdownPrettifier::default().format("---\ntitle: x\n").is_err());
    }

    #[test]
    fn crlf_output_and_auto_detection() {
        let crlf = MarkdownPrettifier::new(FormatterConfig {
            end_of_line: EndOfLine::Crlf,
            ..FormatterConfig::default()
        });
        assert_eq!(crlf.format("a\nb").unwrap(), "a\r\nb\r\n");

        let auto = MarkdownPrettifier::new(FormatterConfig {
            end_of_line: EndOfLine::Auto,
            ..FormatterConfig::default()
        });
        assert_eq!(auto.format("a\r\n\r\n\r\nb").unwrap(), "a\r\n\r\nb\r\n");
        assert_eq!(auto.format("a\nb").unwrap(), "a\nb\n");
    }

    #[test]
    fn formatting_is_idempotent() {
        let samples = [
            "---\ntitle: x \n---\n#  Head\n\n\n\tindented   \n```\n  raw  \n```\n",
            "\r\n# a\r\n\r\n\r\n  b\r\n",
            "",
            "plain",
        ];
        let p = MarkdownPrettifier::default();
        for sample in samples {
            let once = p.format(sample).unwrap();
            assert_eq!(p.format(&once).unwrap(), once, "{sample:?}");
        }
    }

    #[test]
    fn build_prefers_explicit_config() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(PRETTIERRC), r#"{"tabWidth": 8}"#).unwrap();
        let explicit = FormatterConfig {
            tab_width: 3,
            ..FormatterConfig::default()
        };

        let p = MarkdownPrettifier::build(Some(explicit), tmp.path(), &Warnings::default());

        assert_eq!(p.config().tab_width, 3);
    }

    #[test]
    fn build_reads_prettierrc() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(PRETTIERRC), r#"{"tabWidth": 8, "semi": false}"#).unwrap();

        let p = MarkdownPrettifier::build(None, tmp.path(), &Warnings::default());

        assert_eq!(p.config().tab_width, 8);
    }

    #[test]
    fn build_without_prettierrc_is_silent() {
        let tmp = tempfile::tempdir().unwrap();
        let warnings = Warnings::default();

        let p = MarkdownPrettifier::build(None, tmp.path(), &warnings);

        assert_eq!(p, MarkdownPrettifier::default());
        assert!(warnings.0.borrow().is_empty());
    }

    #[test]
    fn build_warns_on_malformed_prettierrc() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(PRETTIERRC), "semi: false\n").unwrap();
        let warnings = Warnings::default();

        let p = MarkdownPrettifier::build(None, tmp.path(), &warnings);

        assert_eq!(p, MarkdownPrettifier::default());
        let warnings = warnings.0.borrow();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(".prettierrc"));
    }
}
