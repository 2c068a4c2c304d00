use orthoview_core::viewer::Readiness;
use orthoview_core::viewport::Container;

use crate::app::OrthoviewApp;
use crate::render::{EguiScheduler, PanelContainer, SlicePainter};

pub fn show(ctx: &egui::Context, app: &mut OrthoviewApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            let container = PanelContainer {
                rect,
                pixels_per_point: ctx.pixels_per_point(),
            };
            follow_container(app, &container);
            handle_pointer(ui, &response, app);

            if response.double_clicked() {
                // Refit the current box to the panel.
                let size = app.viewer.container_size();
                app.viewer.on_resize(size);
            }

            let mut renderer = SlicePainter {
                painter: ui.painter_at(rect),
                rect,
                viewport: &mut app.viewport,
            };
            app.render_loop
                .tick(&mut app.viewer, &mut renderer, &EguiScheduler(ctx));

            if app.viewer.scene().is_empty() {
                show_placeholder(ui, rect, app);
            }
        });
}

fn follow_container(app: &mut OrthoviewApp, container: &PanelContainer) {
    let size = container.offset_size();
    if size != app.viewer.container_size() {
        app.viewer.on_resize(size);
    }
    let ratio = container.device_pixel_ratio();
    if ratio != app.viewer.surface().pixel_ratio() {
        app.viewer.surface_mut().set_pixel_ratio(ratio);
    }
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut OrthoviewApp) {
    let controls = app.viewer.controls_mut();

    if response.dragged_by(egui::PointerButton::Primary)
        || response.dragged_by(egui::PointerButton::Middle)
    {
        let delta = response.drag_delta();
        controls.pan(delta.x, delta.y);
    }
    if response.dragged_by(egui::PointerButton::Secondary) {
        let delta = response.drag_delta();
        controls.rotate(delta.x, delta.y);
    }

    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            controls.zoom(scroll);
        }
    }
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect, app: &OrthoviewApp) {
    let text = match app.viewer.readiness() {
        Readiness::Failed(_) => "Could not load the volume".to_string(),
        _ if app.ui_state.is_busy() => "Loading volume...".to_string(),
        _ => "Open a NIfTI volume to begin".to_string(),
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(140),
    );
}
