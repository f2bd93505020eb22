// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over `TableData`.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::table_model::TableData;

// Departure/arrival/flight/duration/stops are short; metadata and fare are not.
const PREFERRED_WIDTHS: [f32; 8] = [130.0, 130.0, 100.0, 90.0, 80.0, 90.0, 100.0, 220.0];

pub fn draw(ui: &mut egui::Ui, data: &TableData) {
    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let cols = data.ncols();
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));

    for ci in 0..cols {
        let w = PREFERRED_WIDTHS.get(ci).copied().unwrap_or(100.0);
        table = table.column(Column::initial(w).at_least(40.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for h in &data.headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h.as_str()).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, data.nrows(), |mut row| {
                let Some(cells) = data.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
