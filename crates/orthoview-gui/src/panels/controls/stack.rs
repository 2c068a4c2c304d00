use orthoview_core::panel::{PanelEvent, StackControls};

use crate::app::OrthoviewApp;

pub(super) fn stack_section(ui: &mut egui::Ui, app: &mut OrthoviewApp, values: &StackControls) {
    crate::panels::section_header(ui, "Stack", None);
    ui.add_space(4.0);

    let mut index = values.index;
    let response = ui.add(
        egui::Slider::new(&mut index, 0..=values.index_max)
            .text("Index")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.viewer.apply(PanelEvent::Index(index as i64));
    }

    let mut interpolation = i64::from(values.interpolation);
    let response = ui.add(
        egui::Slider::new(&mut interpolation, 0..=1)
            .text("Interpolation")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.viewer.apply(PanelEvent::Interpolation(interpolation));
    }
    ui.small(if interpolation == 0 { "nearest" } else { "linear" });
}
