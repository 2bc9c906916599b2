//! Scaffold pipeline - main application orchestrator.
//!
//! ```text
//! START ─► VALIDATED ─► RENDERED ─► FORMATTED ─► WRITTEN ─► DONE
//!   │          │           │            │           │
//!   └──────────┴───────────┴──── FAILED ┴───────────┘
//! ```
//!
//! Each internal `step` performs exactly one transition
//! and returns either the next state or a [`PipelineFailure`] tagged with the
//! state it was leaving. RENDERED → FORMATTED never fails: a formatter error
//! degrades to the unformatted text. There is no rollback; a component
//! directory created before a failed write stays on disk.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, Formatter, PostSummary, Reporter, TemplateSource},
        services::preflight::Preflight,
    },
    domain::{PostConfig, PostName, RenderContext, ScaffoldTarget, Stage},
    error::{PipelineFailure, PostError, PostResult},
};

/// Completion line printed once the file is on disk.
pub const STEP_SAVED: &str = "Post built and saved to disk.";

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub file_path: PathBuf,
    /// `false` when no formatter was configured or it rejected the text.
    pub formatted: bool,
}

/// Everything known about the post once preflight passed.
#[derive(Debug, Clone)]
struct ValidatedPost {
    target: ScaffoldTarget,
    context: RenderContext,
}

/// Pipeline state, carrying the data each later stage needs.
#[derive(Debug)]
enum PipelineState<'a> {
    Start {
        post_name: Option<&'a str>,
        config: &'a PostConfig,
    },
    Validated {
        post: ValidatedPost,
    },
    Rendered {
        post: ValidatedPost,
        content: String,
    },
    Formatted {
        post: ValidatedPost,
        content: String,
        formatted: bool,
    },
    Written {
        report: ScaffoldReport,
    },
    Done {
        report: ScaffoldReport,
    },
}

impl PipelineState<'_> {
    fn stage(&self) -> Stage {
        match self {
            Self::Start { .. } => Stage::Start,
            Self::Validated { .. } => Stage::Validated,
            Self::Rendered { .. } => Stage::Rendered,
            Self::Formatted { .. } => Stage::Formatted,
            Self::Written { .. } => Stage::Written,
            Self::Done { .. } => Stage::Done,
        }
    }
}

/// Scaffolds one post.
pub struct ScaffoldPipeline<'r> {
    filesystem: Box<dyn Filesystem>,
    template: Box<dyn TemplateSource>,
    formatter: Option<Box<dyn Formatter>>,
    reporter: &'r dyn Reporter,
}

impl<'r> ScaffoldPipeline<'r> {
    /// Create a pipeline with the given adapters. Pass `None` as the formatter
    /// to write the rendered text as-is.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        template: Box<dyn TemplateSource>,
        formatter: Option<Box<dyn Formatter>>,
        reporter: &'r dyn Reporter,
    ) -> Self {
        Self {
            filesystem,
            template,
            formatter,
            reporter,
        }
    }

    /// Drive the state machine from START to DONE.
    ///
    /// Errors are returned, not reported: the caller owns the single
    /// error-reporting path.
    #[instrument(skip_all, fields(post = post_name.unwrap_or_default()))]
    pub fn run(
        &self,
        post_name: Option<&str>,
        config: &PostConfig,
    ) -> Result<ScaffoldReport, PipelineFailure> {
        let mut state = PipelineState::Start { post_name, config };

        loop {
            if let PipelineState::Done { report } = state {
                info!(path = %report.file_path.display(), "Post scaffolded");
                return Ok(report);
            }

            let from = state.stage();
            state = self.step(state)?;
            debug!(%from, to = %state.stage(), "Pipeline transition");
        }
    }

    /// Perform the single transition out of `state`.
    fn step<'a>(&self, state: PipelineState<'a>) -> Result<PipelineState<'a>, PipelineFailure> {
        let stage = state.stage();
        let fail = |e: PostError| PipelineFailure::new(stage, e);

        match state {
            PipelineState::Start { post_name, config } => {
                let post = self.validate(post_name, config).map_err(fail)?;
                Ok(PipelineState::Validated { post })
            }
            PipelineState::Validated { post } => {
                let content = self.render(&post).map_err(fail)?;
                Ok(PipelineState::Rendered { post, content })
            }
            PipelineState::Rendered { post, content } => {
                let (content, formatted) = self.format(content);
                Ok(PipelineState::Formatted {
                    post,
                    content,
                    formatted,
                })
            }
            PipelineState::Formatted {
                post,
                content,
                formatted,
            } => {
                self.write(&post.target, &content).map_err(fail)?;
                Ok(PipelineState::Written {
                    report: ScaffoldReport {
                        file_path: post.target.file_path().to_path_buf(),
                        formatted,
                    },
                })
            }
            PipelineState::Written { report } => {
                self.reporter.step_done(STEP_SAVED);
                self.reporter.conclusion();
                Ok(PipelineState::Done { report })
            }
            PipelineState::Done { report } => Ok(PipelineState::Done { report }),
        }
    }

    // -------------------------------------------------------------------------
    // Stage bodies
    // -------------------------------------------------------------------------

    fn validate(&self, post_name: Option<&str>, config: &PostConfig) -> PostResult<ValidatedPost> {
        let name: PostName = Preflight::check_name(post_name)?;
        let target = ScaffoldTarget::new(config, &name);

        self.reporter.intro(&PostSummary {
            name: name.as_str(),
            dir: target.component_dir(),
            desk: &config.desk,
            date: &config.date,
        });

        Preflight::new(self.filesystem.as_ref()).check_target(&target)?;

        Ok(ValidatedPost {
            context: RenderContext::from_config(&name, config),
            target,
        })
    }

    fn render(&self, post: &ValidatedPost) -> PostResult<String> {
        let raw = self.template.load()?;
        debug!(template = %self.template.describe(), bytes = raw.len(), "Template loaded");
        Ok(post.context.render(&raw))
    }

    fn format(&self, rendered: String) -> (String, bool) {
        let Some(formatter) = &self.formatter else {
            debug!("No formatter configured");
            return (rendered, false);
        };

        match formatter.format(&rendered) {
            Ok(pretty) => (pretty, true),
            Err(e) => {
                warn!(error = %e, "Formatter rejected post, writing unformatted");
                self.reporter
                    .warning(&format!("{e}. Writing the post unformatted."));
                (rendered, false)
            }
        }
    }

    fn write(&self, target: &ScaffoldTarget, content: &str) -> PostResult<()> {
        self.filesystem.create_dir_all(target.component_dir())?;
        self.filesystem.write_file(target.file_path(), content)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, BTreeSet},
        path::Path,
        sync::{Arc, Mutex},
    };

    use chrono::NaiveDate;

    use super::*;
    use crate::{
        application::ApplicationError,
        domain::DomainError,
        error::{PostError, PostResult},
    };

    // ── test doubles ──────────────────────────────────────────────────────

    #[derive(Default)]
    struct DiskState {
        dirs: BTreeSet<PathBuf>,
        files: BTreeMap<PathBuf, String>,
        fail_writes: bool,
    }

    #[derive(Clone, Default)]
    struct FakeFs(Arc<Mutex<DiskState>>);

    impl FakeFs {
        fn with_dirs(dirs: &[&str]) -> Self {
            let fs = Self::default();
            fs.0.lock()
                .unwrap()
                .dirs
                .extend(dirs.iter().map(PathBuf::from));
            fs
        }

        fn file(&self, path: &str) -> Option<String> {
            self.0.lock().unwrap().files.get(Path::new(path)).cloned()
        }

        fn has_dir(&self, path: &str) -> bool {
            self.0.lock().unwrap().dirs.contains(Path::new(path))
        }

        fn file_count(&self) -> usize {
            self.0.lock().unwrap().files.len()
        }
    }

    impl Filesystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            let state = self.0.lock().unwrap();
            state.dirs.contains(path) || state.files.contains_key(path)
        }

        fn create_dir_all(&self, path: &Path) -> PostResult<()> {
            let mut state = self.0.lock().unwrap();
            for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
                state.dirs.insert(ancestor.to_path_buf());
            }
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> PostResult<()> {
            let mut state = self.0.lock().unwrap();
            if state.fail_writes {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into());
            }
            state.files.insert(path.to_path_buf(), content.into());
            Ok(())
        }
    }

    struct FixedTemplate(Option<&'static str>);

    impl TemplateSource for FixedTemplate {
        fn load(&self) -> PostResult<String> {
            self.0.map(str::to_owned).ok_or_else(|| {
                ApplicationError::TemplateUnavailable {
                    path: PathBuf::from("template.mdx"),
                    reason: "No such file or directory".into(),
                }
                .into()
            })
        }

        fn describe(&self) -> String {
            "fixed".into()
        }
    }

    struct Upper;

    impl Formatter for Upper {
        fn format(&self, text: &str) -> PostResult<String> {
            Ok(text.to_uppercase())
        }
    }

    struct Broken;

    impl Formatter for Broken {
        fn format(&self, _text: &str) -> PostResult<String> {
            Err(ApplicationError::FormatFailed {
                reason: "unterminated front matter".into(),
            }
            .into())
        }
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }

        fn push(&self, event: String) {
            self.0.lock().unwrap().push(event);
        }
    }

    impl Reporter for Recorder {
        fn intro(&self, summary: &PostSummary<'_>) {
            self.push(format!("intro:{}:{}", summary.name, summary.dir.display()));
        }
        fn step_done(&self, message: &str) {
            self.push(format!("step:{message}"));
        }
        fn warning(&self, message: &str) {
            self.push(format!("warning:{message}"));
        }
        fn conclusion(&self) {
            self.push("conclusion".into());
        }
        fn error(&self, message: &str) {
            self.push(format!("error:{message}"));
        }
    }

    const TEMPLATE: &str = "Title: POST_TITLE, Desk: POST_DESK, Date: DATE_TODAY";

    fn config() -> PostConfig {
        PostConfig::defaults(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn pipeline<'r>(
        fs: &FakeFs,
        template: Option<&'static str>,
        formatter: Option<Box<dyn Formatter>>,
        reporter: &'r Recorder,
    ) -> ScaffoldPipeline<'r> {
        ScaffoldPipeline::new(
            Box::new(fs.clone()),
            Box::new(FixedTemplate(template)),
            formatter,
            reporter,
        )
    }

    // ── happy path ────────────────────────────────────────────────────────

    #[test]
    fn writes_rendered_post() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();

        let report = pipeline(&fs, Some(TEMPLATE), None, &reporter)
            .run(Some("launch"), &config())
            .unwrap();

        assert_eq!(
            report.file_path,
            PathBuf::from("src/content/launch/launch.mdx")
        );
        assert!(!report.formatted);
        assert_eq!(
            fs.file("src/content/launch/launch.mdx").as_deref(),
            Some("Title: launch, Desk: News, Date: 01-01-2024")
        );
    }

    #[test]
    fn reporter_sees_intro_step_conclusion_in_order() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();

        pipeline(&fs, Some(TEMPLATE), None, &reporter)
            .run(Some("launch"), &config())
            .unwrap();

        assert_eq!(
            reporter.events(),
            vec![
                "intro:launch:src/content/launch".to_string(),
                format!("step:{STEP_SAVED}"),
                "conclusion".to_string(),
            ]
        );
    }

    #[test]
    fn formatter_output_is_written() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();

        let report = pipeline(&fs, Some(TEMPLATE), Some(Box::new(Upper)), &reporter)
            .run(Some("launch"), &config())
            .unwrap();

        assert!(report.formatted);
        assert_eq!(
            fs.file("src/content/launch/launch.mdx").as_deref(),
            Some("TITLE: LAUNCH, DESK: NEWS, DATE: 01-01-2024")
        );
    }

    // ── soft failure ──────────────────────────────────────────────────────

    #[test]
    fn formatter_error_falls_back_to_rendered_text() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();

        let report = pipeline(&fs, Some(TEMPLATE), Some(Box::new(Broken)), &reporter)
            .run(Some("launch"), &config())
            .unwrap();

        assert!(!report.formatted);
        assert_eq!(
            fs.file("src/content/launch/launch.mdx").as_deref(),
            Some("Title: launch, Desk: News, Date: 01-01-2024")
        );
        let events = reporter.events();
        assert!(events.iter().any(|e| e.starts_with("warning:Formatting failed")));
        assert_eq!(events.last().map(String::as_str), Some("conclusion"));
    }

    // ── hard failures ─────────────────────────────────────────────────────

    #[test]
    fn missing_name_fails_at_start_without_intro() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();

        let failure = pipeline(&fs, Some(TEMPLATE), None, &reporter)
            .run(None, &config())
            .unwrap_err();

        assert_eq!(failure.stage, Stage::Start);
        assert_eq!(failure.error, PostError::Domain(DomainError::MissingPostName));
        assert!(reporter.events().is_empty());
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn missing_parent_fails_at_start() {
        let fs = FakeFs::default();
        let reporter = Recorder::default();

        let failure = pipeline(&fs, Some(TEMPLATE), None, &reporter)
            .run(Some("launch"), &config())
            .unwrap_err();

        assert_eq!(failure.stage, Stage::Start);
        assert!(matches!(
            failure.error,
            PostError::Application(ApplicationError::MissingParentDirectory { .. })
        ));
        assert!(!fs.has_dir("src/content/launch"));
    }

    #[test]
    fn second_run_fails_with_post_exists_and_writes_nothing() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();
        let p = pipeline(&fs, Some(TEMPLATE), None, &reporter);

        p.run(Some("launch"), &config()).unwrap();
        let failure = p.run(Some("launch"), &config()).unwrap_err();

        assert_eq!(failure.stage, Stage::Start);
        assert!(matches!(
            failure.error,
            PostError::Application(ApplicationError::PostExists { .. })
        ));
        assert_eq!(fs.file_count(), 1);
    }

    #[test]
    fn missing_template_fails_after_validation_without_mutation() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        let reporter = Recorder::default();

        let failure = pipeline(&fs, None, None, &reporter)
            .run(Some("launch"), &config())
            .unwrap_err();

        assert_eq!(failure.stage, Stage::Validated);
        assert!(matches!(
            failure.error,
            PostError::Application(ApplicationError::TemplateUnavailable { .. })
        ));
        assert!(!fs.has_dir("src/content/launch"));
    }

    #[test]
    fn write_failure_leaves_directory_and_reports_no_success() {
        let fs = FakeFs::with_dirs(&["src/content"]);
        fs.0.lock().unwrap().fail_writes = true;
        let reporter = Recorder::default();

        let failure = pipeline(&fs, Some(TEMPLATE), None, &reporter)
            .run(Some("launch"), &config())
            .unwrap_err();

        assert_eq!(failure.stage, Stage::Formatted);
        assert!(fs.has_dir("src/content/launch"));
        assert!(!reporter.events().iter().any(|e| e == "conclusion"));
    }

    #[test]
    fn nested_parent_segments_are_tolerated() {
        let fs = FakeFs::with_dirs(&["site", "site/posts"]);
        let reporter = Recorder::default();
        let mut cfg = config();
        cfg.dir = PathBuf::from("site/posts");

        pipeline(&fs, Some(TEMPLATE), None, &reporter)
            .run(Some("launch"), &cfg)
            .unwrap();

        assert!(fs.file("site/posts/launch/launch.mdx").is_some());
    }
}
