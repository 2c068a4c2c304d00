use std::path::PathBuf;
use std::time::Duration;

use orthoview_core::config::ViewerConfig;
use orthoview_core::io::fetch::VolumeSource;
use orthoview_core::pipeline::{LoadError, LoadStage, LoadedVolume};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch, decode and merge the given sources.
    LoadVolume {
        generation: u64,
        sources: Vec<VolumeSource>,
    },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Progress update during a load.
    Progress {
        generation: u64,
        stage: LoadStage,
        items_done: Option<usize>,
        items_total: Option<usize>,
    },

    /// The loader no longer needs its progress bar.
    ProgressDone { generation: u64 },

    /// Load finished, successfully or not.
    VolumeLoaded {
        generation: u64,
        result: Result<LoadedVolume, LoadError>,
        elapsed: Duration,
    },

    /// A volume file was chosen in the open dialog.
    FilePicked {
        path: PathBuf,
    },
    ConfigImported {
        config: ViewerConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
