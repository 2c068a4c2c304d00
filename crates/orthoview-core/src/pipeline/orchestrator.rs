use std::time::Instant;

use tracing::info;

use crate::error::{OrthoviewError, Result};
use crate::io::fetch::{VolumeFetcher, VolumeSource};
use crate::io::nifti::decode_nifti;
use crate::volume::merge_series;

use super::types::{LoadStage, LoadedVolume, ProgressReporter};

/// Fetch, decode and merge the given sources into a displayable volume.
///
/// Runs to completion or fails on the first error; nothing is retried. On
/// success the reporter is told to release its UI resources.
pub fn load_volume(
    sources: &[VolumeSource],
    fetcher: &dyn VolumeFetcher,
    reporter: &dyn ProgressReporter,
) -> Result<LoadedVolume> {
    if sources.is_empty() {
        return Err(OrthoviewError::NoSources);
    }
    let start = Instant::now();

    let mut files = Vec::with_capacity(sources.len());
    for (i, source) in sources.iter().enumerate() {
        let bytes = fetcher.fetch(source, reporter)?;
        reporter.begin_stage(LoadStage::Decoding, Some(sources.len()));
        files.push(decode_nifti(&bytes, &source.name())?);
        reporter.advance(i + 1);
    }

    reporter.begin_stage(LoadStage::Merging, None);
    let series = merge_series(files)?;
    let loaded = LoadedVolume::from_series(series)?;
    reporter.finish();

    let dims = loaded.stack().dimensions_ijk();
    info!(
        series = loaded.series().len(),
        dims = %dims,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "volume loaded"
    );
    Ok(loaded)
}
