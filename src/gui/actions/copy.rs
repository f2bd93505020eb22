// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

/// Current table → clipboard as TSV (pastes cleanly into spreadsheets).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.view.table().filter(|t| !t.is_empty()) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let txt = csv::to_delimited_string(Some(table.headers.as_slice()), &table.rows, '\t');
    logf!("Copy: rows={}, headers={}", table.nrows(), table.ncols());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
