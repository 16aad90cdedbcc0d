// src/gui/components/data_table.rs
//
// Draws the ranked report. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{attributes::NAME, gui::app::App};

fn initial_width(header: &str) -> f32 {
    if header == NAME {
        180.0
    } else {
        (header.len() as f32 * 8.0).clamp(40.0, 220.0)
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(report) = app.report.as_ref() else {
        ui.label("No staff loaded.");
        return;
    };

    let numeric = report.numeric_columns();
    let sort_ix = report.column_index(&report.sort_by);

    egui::ScrollArea::horizontal()
        .id_salt("report_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("report", &report.headers));
            for h in &report.headers {
                table = table.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in report.headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let mut text = RichText::new(h).strong();
                            if Some(ci) == sort_ix {
                                text = text.underline();
                            }
                            if numeric.get(ci).copied().unwrap_or(false) {
                                ui.centered_and_justified(|ui| { ui.label(text); });
                            } else {
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, report.nrows(), |mut row| {
                        let Some(cells) = report.rows.get(row.index()) else {
                            return;
                        };
                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let text = cell.to_string();
                                if numeric.get(ci).copied().unwrap_or(false) {
                                    ui.centered_and_justified(|ui| { ui.label(text); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                                }
                            });
                        }
                    });
                });
        });
}
