use orthoview_core::consts::DEFAULT_VOLUME_URL;
use orthoview_core::viewer::Readiness;

use crate::app::OrthoviewApp;

pub(super) fn volume_section(ui: &mut egui::Ui, app: &mut OrthoviewApp) {
    let status = match app.viewer.readiness() {
        Readiness::Pending if app.ui_state.is_busy() => Some("loading"),
        Readiness::Pending => None,
        Readiness::Ready => Some("ready"),
        Readiness::Failed(_) => Some("failed"),
    };
    crate::panels::section_header(ui, "Volume", status);
    ui.add_space(4.0);

    if let Some(ref label) = app.ui_state.source_label {
        ui.add(egui::Label::new(egui::RichText::new(label).small()).truncate());
    }

    if let Some(helper) = app.viewer.stack_helper() {
        let stack = helper.stack();
        let dims = stack.dimensions_ijk();
        let spacing = stack.geometry.spacing;
        ui.small(format!("{}x{}x{} voxels", dims.x, dims.y, dims.z));
        ui.small(format!(
            "Spacing {:.2} x {:.2} x {:.2} mm",
            spacing.x, spacing.y, spacing.z
        ));
        ui.small(format!("Intensity {:.1} to {:.1}", stack.min, stack.max));
    }

    ui.add_space(4.0);
    ui.add_enabled_ui(!app.ui_state.is_busy(), |ui| {
        if ui.button("Reload Default Volume").clicked() {
            app.load_source(DEFAULT_VOLUME_URL);
        }
    });
}
