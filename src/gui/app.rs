// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;
use tracing::{error, info};

use crate::{
    config::options::AppOptions,
    rank::Report,
    runner,
    table::StaffTable,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Staff Search",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // text fields (mapped into options on Load / Export)
    pub input_text: String,
    pub out_path_text: String,

    // normalized staff, rescored whenever the controls change
    pub table: Option<StaffTable>,
    pub report: Option<Report>,

    pub status: String,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let input_text = options.input.to_string_lossy().into_owned();
        let mut app = Self {
            options,
            input_text,
            out_path_text: s!("./"),
            table: None,
            report: None,
            status: s!("Idle"),
        };

        if app.options.input.is_file() {
            app.load();
        }
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// (Re)read the input file and rank it with the current controls.
    pub fn load(&mut self) {
        self.options.input = PathBuf::from(self.input_text.trim());
        info!("UI: Load {}", self.options.input.display());

        match runner::load_staff(&self.options.input, &self.options.cache) {
            Ok(loaded) => {
                let from = match &loaded.cache_hit {
                    Some(p) => format!(" (cache: {})", p.display()),
                    None => s!(),
                };
                self.status(format!("Loaded {} staff{}", loaded.table.len(), from));
                self.table = Some(loaded.table);
                self.refresh();
            }
            Err(e) => {
                error!("Load: {}", e);
                self.table = None;
                self.report = None;
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Rescore and rerank the loaded table. Scoring overwrites its own
    /// output columns, so this is safe to call on every change.
    pub fn refresh(&mut self) {
        let Some(table) = self.table.as_mut() else {
            return;
        };
        match runner::analyse(table, &self.options) {
            Ok(report) => {
                self.report = Some(report);
            }
            Err(e) => {
                error!("Rank: {}", e);
                self.report = None;
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Numeric display columns of the current scheme; the ranking can be
    /// switched to any of them.
    pub fn sortable_columns(&self) -> Vec<String> {
        let Some(table) = self.table.as_ref() else {
            return Vec::new();
        };
        self.options
            .scheme
            .display_columns(table)
            .into_iter()
            .filter(|c| table.ints(c).is_some())
            .collect()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::controls::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
