mod orchestrator;
mod types;

pub use orchestrator::load_volume;
pub use types::{LoadStage, LoadedVolume, NoOpReporter, ProgressReporter};

/// Error returned by the load pipeline.
pub type LoadError = crate::error::OrthoviewError;
