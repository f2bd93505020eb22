// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{config::consts::SEARCH_FAILED_MSG, progress::Progress};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, _url: &str) {
        self.set_status("Searching…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn finish(&mut self, rows: Option<usize>) {
        match rows {
            Some(n) => self.set_status(format!("Found {} flight(s)", n)),
            None => self.set_status(SEARCH_FAILED_MSG),
        }
    }
}
