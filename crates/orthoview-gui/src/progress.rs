use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Mutex};

use orthoview_core::pipeline::{LoadStage, ProgressReporter};

use crate::messages::WorkerResult;

/// Progress reporter that sends updates over an mpsc channel to the UI thread.
pub struct ChannelProgressReporter {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    generation: u64,
    current_stage: Mutex<LoadStage>,
    current_total: AtomicUsize,
}

impl ChannelProgressReporter {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context, generation: u64) -> Self {
        Self {
            tx,
            ctx,
            generation,
            current_stage: Mutex::new(LoadStage::Fetching),
            current_total: AtomicUsize::new(0),
        }
    }

    fn send(&self, result: WorkerResult) {
        let _ = self.tx.send(result);
        self.ctx.request_repaint();
    }

    fn stage(&self) -> LoadStage {
        self.current_stage
            .lock()
            .map(|s| *s)
            .unwrap_or(LoadStage::Fetching)
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn begin_stage(&self, stage: LoadStage, total_items: Option<usize>) {
        if let Ok(mut current) = self.current_stage.lock() {
            *current = stage;
        }
        self.current_total.store(total_items.unwrap_or(0), Ordering::Relaxed);
        self.send(WorkerResult::Progress {
            generation: self.generation,
            stage,
            items_done: Some(0),
            items_total: total_items,
        });
    }

    fn advance(&self, items_done: usize) {
        let total = self.current_total.load(Ordering::Relaxed);
        self.send(WorkerResult::Progress {
            generation: self.generation,
            stage: self.stage(),
            items_done: Some(items_done),
            items_total: if total > 0 { Some(total) } else { None },
        });
    }

    fn finish(&self) {
        self.send(WorkerResult::ProgressDone {
            generation: self.generation,
        });
    }
}
