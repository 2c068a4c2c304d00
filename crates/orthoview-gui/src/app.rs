use std::sync::mpsc;

use orthoview_core::config::ViewerConfig;
use orthoview_core::io::fetch::VolumeSource;
use orthoview_core::render_loop::{CancellationToken, RenderLoop};
use orthoview_core::viewer::Viewer;
use orthoview_core::viewport::ContainerSize;
use tracing::debug;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::workers;

pub struct OrthoviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub viewer: Viewer,
    pub render_loop: RenderLoop,
    pub config: ViewerConfig,
    pub show_about: bool,
}

impl OrthoviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone());

        // Replaced by the central panel size on the first frame.
        let initial = ContainerSize::new(config.window.width, config.window.height);
        let viewer = Viewer::new(&initial, config.clone());

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            viewer,
            render_loop: RenderLoop::new(CancellationToken::new()),
            config,
            show_about: false,
        };
        let source = app.config.source.clone();
        app.load_source(&source);
        app
    }

    /// Start loading a volume from a URL or a local path.
    pub fn load_source(&mut self, source: &str) {
        let source: VolumeSource = match source.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        };
        self.load(source);
    }

    pub fn load(&mut self, source: VolumeSource) {
        self.ui_state.source_label = Some(source.name());
        self.viewer.begin_load();
        let generation = self.ui_state.next_load();
        self.send_command(WorkerCommand::LoadVolume {
            generation,
            sources: vec![source],
        });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Progress {
                    generation,
                    stage,
                    items_done,
                    items_total,
                } => {
                    if !self.ui_state.is_current_load(generation) {
                        continue;
                    }
                    self.ui_state.loading = Some(stage);
                    self.ui_state.progress_items_done = items_done;
                    self.ui_state.progress_items_total = items_total;
                }
                WorkerResult::ProgressDone { generation } => {
                    if self.ui_state.is_current_load(generation) {
                        self.ui_state.clear_progress();
                    }
                }
                WorkerResult::VolumeLoaded {
                    generation,
                    result,
                    elapsed,
                } => {
                    if !self.ui_state.is_current_load(generation) {
                        debug!(generation, "dropping result of a superseded load");
                        continue;
                    }
                    self.ui_state.clear_progress();
                    match self.viewer.handle_load_result(result) {
                        Ok(()) => {
                            self.viewport.invalidate();
                            self.ui_state
                                .add_log(format!("Volume loaded in {}", format_duration(elapsed)));
                        }
                        Err(e) => {
                            self.ui_state.add_log(format!("ERROR: {e}"));
                        }
                    }
                }
                WorkerResult::FilePicked { path } => {
                    self.load(VolumeSource::Path(path));
                }
                WorkerResult::ConfigImported { config } => {
                    let size = self.viewer.container_size();
                    self.viewer = Viewer::new(&size, config.clone());
                    self.viewport.invalidate();
                    self.config = config;
                    self.ui_state.add_log("Config imported".into());
                    let source = self.config.source.clone();
                    self.load_source(&source);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Stop drawing and close the window.
    pub fn quit(&mut self, ctx: &egui::Context) {
        self.render_loop.stop();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for OrthoviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        if ctx.input(|i| i.viewport().close_requested()) {
            self.render_loop.stop();
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Orthoview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Orthoview");
                        ui.label("Orthographic NIfTI Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
