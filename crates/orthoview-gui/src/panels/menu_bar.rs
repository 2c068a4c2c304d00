use orthoview_core::config::ViewerConfig;
use orthoview_core::consts::DEFAULT_VOLUME_URL;

use crate::app::OrthoviewApp;
use crate::messages::WorkerResult;
use crate::workers;

pub fn show(ctx: &egui::Context, app: &mut OrthoviewApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(
                        egui::Button::new("Open File...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_file(ctx, app);
                }

                if ui.button("Open Default Volume").clicked() {
                    ui.close();
                    app.load_source(DEFAULT_VOLUME_URL);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                ui.separator();

                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.quit(ctx);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            app.quit(ctx);
        }
    });
}

fn open_file(ctx: &egui::Context, app: &mut OrthoviewApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("NIfTI", &["nii", "gz"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            workers::send(&result_tx, &ctx, WorkerResult::FilePicked { path });
        }
    });
}

fn import_config(ctx: &egui::Context, app: &mut OrthoviewApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        match ViewerConfig::from_file(&path) {
            Ok(config) => workers::send(&result_tx, &ctx, WorkerResult::ConfigImported { config }),
            Err(e) => workers::send_error(
                &result_tx,
                &ctx,
                format!("Failed to import {}: {e}", path.display()),
            ),
        }
    });
}
