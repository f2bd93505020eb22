// src/gui/components/search_panel.rs
//
// Left sidebar: the search form and the "Search Flights" trigger.
// Edits go straight into `app.state.gui`; the search action snapshots them.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::{
    config::consts::MAX_PASSENGERS,
    criteria::TripType,
    gui::{
        actions,
        app::{App, Phase},
    },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Search");
    ui.separator();

    let mut changed = false;
    {
        let form = &mut app.state.gui;

        let before = form.trip_type;
        egui::ComboBox::from_label("Trip Type")
            .selected_text(form.trip_type.label())
            .show_ui(ui, |ui| {
                for t in TripType::ALL {
                    ui.selectable_value(&mut form.trip_type, t, t.label());
                }
            });
        if form.trip_type != before {
            logf!("UI: Trip type → {:?}", form.trip_type);
            changed = true;
        }

        ui.add_space(6.0);
        ui.label("Departure Airport (e.g., DAR)");
        changed |= ui.text_edit_singleline(&mut form.origin).changed();
        ui.label("Arrival Airport (e.g., ARK)");
        changed |= ui.text_edit_singleline(&mut form.destination).changed();

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Departure Date");
            changed |= ui
                .add(DatePickerButton::new(&mut form.departure).id_salt("departure_date"))
                .changed();
        });
        if form.trip_type == TripType::RoundTrip {
            ui.horizontal(|ui| {
                ui.label("Return Date");
                changed |= ui
                    .add(DatePickerButton::new(&mut form.return_date).id_salt("return_date"))
                    .changed();
            });
        }

        ui.add_space(6.0);
        egui::Grid::new("passengers").num_columns(2).show(ui, |ui| {
            ui.label("Adults");
            changed |= ui
                .add(egui::DragValue::new(&mut form.adults).range(1..=MAX_PASSENGERS))
                .changed();
            ui.end_row();

            ui.label("Child");
            changed |= ui
                .add(egui::DragValue::new(&mut form.children).range(0..=MAX_PASSENGERS))
                .changed();
            ui.end_row();

            ui.label("Infant");
            changed |= ui
                .add(egui::DragValue::new(&mut form.infants).range(0..=MAX_PASSENGERS))
                .changed();
            ui.end_row();
        });
    }

    if changed {
        app.refresh_url_preview();
    }

    ui.add_space(10.0);
    let idle = app.phase == Phase::Idle;
    if ui
        .add_enabled(idle, egui::Button::new(egui::RichText::new("Search Flights").strong()))
        .clicked()
    {
        actions::search(app);
    }

    ui.add_space(10.0);
    ui.checkbox(&mut app.state.gui.show_url, "Show generated URL");
    if app.state.gui.show_url {
        ui.add(
            egui::Label::new(egui::RichText::new(app.url_preview.as_str()).monospace().small())
                .wrap(),
        );
    }
}
