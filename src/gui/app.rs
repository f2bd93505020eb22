// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::config::{consts::APP_TITLE, state::AppState};

use super::{
    components::{results, search_panel},
    table_model::ResultView,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Idle → Searching → Idle. The search runs on the UI thread, so
/// `Searching` only ever lasts for the duration of the blocking call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // outcome of the last search
    pub view: ResultView,

    // URL the current form would request (shown on demand)
    pub url_preview: String,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
    pub phase: Phase,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: base_url={}", state.options.search.base_url);
        let mut app = Self {
            state,
            view: ResultView::Empty,
            url_preview: s!(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            phase: Phase::Idle,
        };
        app.refresh_url_preview();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Recompute the URL shown under "Generated URL" from the form.
    pub fn refresh_url_preview(&mut self) {
        self.url_preview = match self.state.gui.criteria() {
            Ok(c) => match crate::query::build_url(&c, &self.state.options.search) {
                Ok(url) => url.into(),
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("search")
            .resizable(false)
            .show(ctx, |ui| {
                search_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.separator();
            results::draw(ui, self);
        });
    }
}
