// src/gui/components/export_bar.rs

use std::path::PathBuf;

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::options::OutputFormat,
    file,
    gui::app::App,
    render,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        ui.add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace));
    });

    ui.horizontal(|ui| {
        // Copy
        if ui.button("Copy CSV").clicked() {
            match app.report.as_ref().filter(|r| !r.is_empty()) {
                None => app.status("Nothing to copy"),
                Some(report) => match render::to_csv(report, ',') {
                    Ok(txt) => {
                        info!("Copy: rows={} headers={}", report.nrows(), report.ncols());
                        ui.ctx().copy_text(txt);
                        app.status("Copied to clipboard");
                    }
                    Err(e) => app.status(format!("Copy error: {e}")),
                },
            }
        }

        // Export
        if ui.button("Export HTML").clicked() {
            match app.report.as_ref().filter(|r| !r.is_empty()) {
                None => app.status("Nothing to export"),
                Some(report) => {
                    let path = file::resolve_out_path(
                        &PathBuf::from(app.out_path_text.trim()),
                        app.options.scheme,
                        app.options.count,
                        OutputFormat::Html,
                    );
                    match file::write_output(&path, &render::to_html(report)) {
                        Ok(()) => {
                            info!("Export: OK {}", path.display());
                            app.status(format!("Exported {}", path.display()));
                        }
                        Err(e) => {
                            error!("Export: {}", e);
                            app.status(format!("Export error: {e}"));
                        }
                    }
                }
            }
        }

        ui.label(format!("Status: {}", app.status));
    });
}
