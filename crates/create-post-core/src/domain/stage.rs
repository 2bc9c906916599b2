use std::fmt;

/// States of the scaffold pipeline, in the only order they can be visited.
///
/// `Formatted` is skipped when no formatter is configured. A failure while
/// leaving a state is reported against that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Start,
    Validated,
    Rendered,
    Formatted,
    Written,
    Done,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Validated => "validated",
            Self::Rendered => "rendered",
            Self::Formatted => "formatted",
            Self::Written => "written",
            Self::Done => "done",
        }
    }

    /// What the pipeline is doing while it leaves this state.
    pub const fn activity(self) -> &'static str {
        match self {
            Self::Start => "validating target",
            Self::Validated => "rendering template",
            Self::Rendered => "formatting post",
            Self::Formatted => "writing post",
            Self::Written => "reporting success",
            Self::Done => "finished",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
