use orthoview_core::viewer::Readiness;

use crate::app::OrthoviewApp;

pub fn show(ctx: &egui::Context, app: &mut OrthoviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar
        if let Some(stage) = app.ui_state.loading {
            let fraction = match (
                app.ui_state.progress_items_done,
                app.ui_state.progress_items_total,
            ) {
                (Some(done), Some(total)) if total > 0 => done as f32 / total as f32,
                _ => 0.0, // indeterminate
            };

            let detail = match (
                app.ui_state.progress_items_done,
                app.ui_state.progress_items_total,
            ) {
                (Some(done), Some(total)) => format!("{stage} ({done}/{total})"),
                _ => format!("{stage}..."),
            };

            ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
        } else {
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed at 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let viewer = &app.viewer;
            if let Some(helper) = viewer.stack_helper() {
                let dims = helper.stack().dimensions_ijk();
                ui.label(format!("{}x{}x{}", dims.x, dims.y, dims.z));
                ui.separator();
                ui.label(format!(
                    "Slice: {}/{}",
                    helper.index(),
                    helper.orientation_max_index()
                ));
                ui.separator();
            }
            let (pw, ph) = viewer.surface().physical_size();
            ui.label(format!("Surface: {pw}x{ph} px"));
            ui.separator();
            let camera = viewer.camera();
            ui.label(format!("Zoom: {:.2}", camera.zoom()));
            ui.separator();
            ui.label(format!("{} / {}", camera.orientation(), camera.convention()));
            ui.separator();
            ui.label(format!("Angle: {:.0}", camera.angle()));
            if let Readiness::Failed(ref reason) = *viewer.readiness() {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), reason);
            }
        });

        ui.add_space(2.0);
    });
}
