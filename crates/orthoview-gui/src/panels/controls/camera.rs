use orthoview_core::orientation::{Convention, Orientation};
use orthoview_core::panel::{CameraControls, ConfigPanel, PanelEvent};

use crate::app::OrthoviewApp;
use crate::panels::enum_combo;

pub(super) fn camera_section(ui: &mut egui::Ui, app: &mut OrthoviewApp, values: &CameraControls) {
    crate::panels::section_header(ui, "Camera", None);
    ui.add_space(4.0);

    let mut invert_rows = values.invert_rows;
    if ui.checkbox(&mut invert_rows, "Invert rows").changed() {
        app.viewer.apply(PanelEvent::InvertRows(invert_rows));
    }

    let mut invert_columns = values.invert_columns;
    if ui.checkbox(&mut invert_columns, "Invert columns").changed() {
        app.viewer.apply(PanelEvent::InvertColumns(invert_columns));
    }

    if ui.button("Rotate right").clicked() {
        app.viewer.apply(PanelEvent::RotateRight);
    }

    let mut angle = values.angle;
    let response = ui.add(
        egui::Slider::new(&mut angle, 0.0..=ConfigPanel::ANGLE_MAX)
            .step_by(1.0)
            .text("Angle")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.viewer.apply(PanelEvent::Angle(angle));
    }

    let mut orientation = values.orientation;
    if enum_combo(ui, "Orientation", &mut orientation, Orientation::ALL) {
        app.viewer.apply(PanelEvent::Orientation(orientation));
    }

    let mut convention = values.convention;
    if enum_combo(ui, "Convention", &mut convention, Convention::ALL) {
        app.viewer.apply(PanelEvent::Convention(convention));
    }
}
