use std::sync::mpsc;
use std::time::Instant;

use orthoview_core::io::fetch::{HttpFetcher, VolumeSource};
use orthoview_core::pipeline::load_volume;

use crate::messages::WorkerResult;
use crate::progress::ChannelProgressReporter;

use super::{send, send_log};

pub(super) fn handle_load_volume(
    generation: u64,
    sources: &[VolumeSource],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let names: Vec<String> = sources.iter().map(VolumeSource::name).collect();
    send_log(tx, ctx, format!("Loading {}", names.join(", ")));

    let start = Instant::now();
    let reporter = ChannelProgressReporter::new(tx.clone(), ctx.clone(), generation);
    let result = load_volume(sources, &HttpFetcher, &reporter);

    send(
        tx,
        ctx,
        WorkerResult::VolumeLoaded {
            generation,
            result,
            elapsed: start.elapsed(),
        },
    );
}
