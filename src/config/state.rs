// src/config/state.rs
use chrono::{Local, NaiveDate};

use super::consts::{DEFAULT_DESTINATION, DEFAULT_ORIGIN};
use super::options::AppOptions;
use crate::{
    criteria::{Passengers, SearchCriteria, TripType},
    error::CriteriaError,
};

/// Search form fields, exactly as the user left them.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub trip_type: TripType,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDate,
    /// Only read for round trips
    pub return_date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub show_url: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self::for_day(Local::now().date_naive())
    }
}

impl GuiState {
    /// Form defaults relative to `today`: depart today, return the day after.
    pub fn for_day(today: NaiveDate) -> Self {
        Self {
            trip_type: TripType::OneWay,
            origin: s!(DEFAULT_ORIGIN),
            destination: s!(DEFAULT_DESTINATION),
            departure: today,
            return_date: today.succ_opt().unwrap_or(today),
            adults: 1,
            children: 0,
            infants: 0,
            show_url: false,
        }
    }

    /// Snapshot the form into an immutable search.
    pub fn criteria(&self) -> Result<SearchCriteria, CriteriaError> {
        let return_date = match self.trip_type {
            TripType::OneWay => None,
            TripType::RoundTrip => Some(self.return_date),
        };
        SearchCriteria::new(
            self.trip_type,
            self.origin.trim(),
            self.destination.trim(),
            self.departure,
            return_date,
            Passengers::new(self.adults, self.children, self.infants),
        )
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::from_env(),
            gui: GuiState::default(),
        }
    }
}
