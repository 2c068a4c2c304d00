use crate::error::{OrthoviewError, Result};
use crate::volume::{Series, Stack};

/// Load pipeline stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStage {
    Fetching,
    Decoding,
    Merging,
}

impl std::fmt::Display for LoadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetching => write!(f, "Fetching volume"),
            Self::Decoding => write!(f, "Decoding volume"),
            Self::Merging => write!(f, "Merging series"),
        }
    }
}

/// Outcome of a successful load: every merged series, with a guaranteed
/// display stack (first stack of the first series).
#[derive(Clone, Debug)]
pub struct LoadedVolume {
    series: Vec<Series>,
}

impl LoadedVolume {
    pub fn from_series(series: Vec<Series>) -> Result<Self> {
        let has_stack = series.first().is_some_and(|s| !s.stacks.is_empty());
        if !has_stack {
            return Err(OrthoviewError::NoStack);
        }
        Ok(Self { series })
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The stack shown by the viewer.
    pub fn stack(&self) -> &Stack {
        &self.series[0].stacks[0]
    }

    pub fn into_stack(mut self) -> Stack {
        self.series.swap_remove(0).stacks.swap_remove(0)
    }
}

/// Thread-safe progress reporting for the load pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// (bytes while fetching, files while decoding), if known.
    fn begin_stage(&self, _stage: LoadStage, _total_items: Option<usize>) {}

    /// Work items completed so far within the current stage.
    fn advance(&self, _items_done: usize) {}

    /// The loader is done with its UI resources (progress bar, spinner).
    fn finish(&self) {}
}

/// Reporter that discards every update.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
