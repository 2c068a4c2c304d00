pub mod config;
pub mod info;
pub mod slice;

use anyhow::{Context, Result};
use orthoview_core::io::fetch::{HttpFetcher, VolumeSource};
use orthoview_core::pipeline::{load_volume, LoadedVolume};

use crate::progress::BarReporter;

/// Fetch and decode one source with a progress bar on the terminal.
pub fn load_source(source: &str) -> Result<LoadedVolume> {
    let source: VolumeSource = source.parse()?;
    let reporter = BarReporter::new()?;
    load_volume(std::slice::from_ref(&source), &HttpFetcher, &reporter)
        .with_context(|| format!("Failed to load {source}"))
}
