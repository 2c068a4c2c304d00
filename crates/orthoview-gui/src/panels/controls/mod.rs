mod camera;
mod stack;
mod volume;

use crate::app::OrthoviewApp;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut OrthoviewApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                volume::volume_section(ui, app);

                // The camera and stack folders exist once a volume is attached.
                let Some(panel) = app.viewer.panel().cloned() else {
                    return;
                };
                ui.separator();
                camera::camera_section(ui, app, &panel.camera);
                ui.separator();
                stack::stack_section(ui, app, &panel.stack);
            });
        });
}
