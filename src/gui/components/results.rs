// src/gui/components/results.rs
//
// Central panel: trip caption + Copy, then the table or the error.

use eframe::egui;

use crate::gui::{actions, app::App, table_model::ResultView};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut copy_clicked = false;

    match &app.view {
        ResultView::Empty => {
            ui.label("Fill in the search form and press \"Search Flights\".");
        }
        ResultView::Error(msg) => {
            ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
        }
        ResultView::Table { meta, data } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("From: {}", meta.from)).strong());
                ui.separator();
                ui.label(egui::RichText::new(format!("To: {}", meta.to)).strong());
                ui.separator();
                ui.label(format!("{} flight(s)", data.nrows()));
                if ui.button("Copy").on_hover_text("Copy table as TSV").clicked() {
                    copy_clicked = true;
                }
            });
            ui.separator();

            if data.is_empty() {
                ui.label("No flights found for this search.");
            } else {
                super::data_table::draw(ui, data);
            }
        }
    }

    // Handle copy after the view borrow ends
    if copy_clicked {
        actions::copy(app, ui.ctx());
    }
}
