// src/gui/components/controls.rs
//
// Side panel: input file, caching, scheme, count and sort column.
// Any change that affects ranking triggers App::refresh.

use eframe::egui;
use tracing::info;

use crate::{config::consts::MAX_GUI_COUNT, gui::app::App, scoring::Scheme};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Staff Search");
    ui.separator();

    ui.label("Input file:");
    ui.add(egui::TextEdit::singleline(&mut app.input_text).font(egui::TextStyle::Monospace));

    ui.horizontal(|ui| {
        if ui.button("Load").clicked() {
            app.load();
        }
        ui.checkbox(&mut app.options.cache.enabled, "Use cache")
            .on_hover_text(format!("Cleaned copies go to {}", app.options.cache.dir.display()));
    });

    ui.separator();

    let mut changed = false;

    // --- Scheme ---
    let before = app.options.scheme;
    ui.label("Scheme:");
    egui::ComboBox::from_id_salt("scheme")
        .selected_text(app.options.scheme.name())
        .show_ui(ui, |ui| {
            for scheme in Scheme::ALL {
                ui.selectable_value(&mut app.options.scheme, scheme, scheme.name())
                    .on_hover_text(scheme.spec().about);
            }
        });
    if app.options.scheme != before {
        info!("UI: scheme → {}", app.options.scheme);
        // a sort column from the old scheme may not exist under the new one
        app.options.sort_by = None;
        changed = true;
    }

    // --- Count ---
    ui.horizontal(|ui| {
        ui.label("Show top");
        if ui
            .add(egui::DragValue::new(&mut app.options.count).range(1..=MAX_GUI_COUNT))
            .changed()
        {
            changed = true;
        }
    });

    // --- Sort ---
    let default_label = format!("{} (default)", app.options.scheme.default_sort());
    let selected = app.options.sort_by.clone().unwrap_or_else(|| default_label.clone());
    let columns = app.sortable_columns();
    let mut sort_by = app.options.sort_by.clone();

    ui.label("Sort by:");
    egui::ComboBox::from_id_salt("sort_by")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut sort_by, None, default_label);
            for c in columns {
                let label = c.clone();
                ui.selectable_value(&mut sort_by, Some(c), label);
            }
        });
    if sort_by != app.options.sort_by {
        info!("UI: sort → {:?}", sort_by);
        app.options.sort_by = sort_by;
        changed = true;
    }

    if changed {
        app.refresh();
    }

    ui.separator();
    if let Some(table) = &app.table {
        ui.label(format!("{} staff loaded", table.len()));
    }
}
