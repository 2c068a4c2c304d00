use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{OrthoviewError, Result};
use crate::pipeline::{LoadStage, ProgressReporter};

const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Where a volume file comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VolumeSource {
    Url(String),
    Path(PathBuf),
}

impl VolumeSource {
    /// Identifier used for logging and as the series uid.
    pub fn name(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

impl FromStr for VolumeSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(trimmed.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for VolumeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Retrieves the raw (possibly compressed) bytes of a volume file.
pub trait VolumeFetcher: Send + Sync {
    fn fetch(&self, source: &VolumeSource, reporter: &dyn ProgressReporter) -> Result<Vec<u8>>;
}

/// Fetches URLs over HTTP(S) and paths from the local filesystem.
#[derive(Default)]
pub struct HttpFetcher;

impl VolumeFetcher for HttpFetcher {
    fn fetch(&self, source: &VolumeSource, reporter: &dyn ProgressReporter) -> Result<Vec<u8>> {
        match source {
            VolumeSource::Url(url) => fetch_url(url, reporter),
            VolumeSource::Path(path) => {
                let bytes = std::fs::read(path)?;
                reporter.begin_stage(LoadStage::Fetching, Some(bytes.len()));
                reporter.advance(bytes.len());
                Ok(bytes)
            }
        }
    }
}

fn fetch_url(url: &str, reporter: &dyn ProgressReporter) -> Result<Vec<u8>> {
    let fetch_error = |reason: String| OrthoviewError::Fetch {
        source_name: url.to_string(),
        reason,
    };

    info!(url, "fetching volume");
    let response = ureq::get(url).call().map_err(|e| fetch_error(e.to_string()))?;

    let total = response
        .header("Content-Length")
        .and_then(|v| v.parse::<usize>().ok());
    reporter.begin_stage(LoadStage::Fetching, total);

    let mut reader = response.into_reader();
    let mut bytes = Vec::with_capacity(total.unwrap_or(0));
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];
    loop {
        let n = reader
            .read(&mut chunk)
            .map_err(|e| fetch_error(e.to_string()))?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
        reporter.advance(bytes.len());
    }

    debug!(url, bytes = bytes.len(), "download complete");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urls_and_paths() {
        let url: VolumeSource = "https://example.org/brain.nii.gz".parse().unwrap();
        assert_eq!(url, VolumeSource::Url("https://example.org/brain.nii.gz".into()));

        let path: VolumeSource = " data/brain.nii ".parse().unwrap();
        assert_eq!(path, VolumeSource::Path(PathBuf::from("data/brain.nii")));
    }
}
