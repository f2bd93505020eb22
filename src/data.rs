// src/data.rs
//
// Extracted flight data, from parallel columns to the result table.
//
// - FlightColumns: what the extractor produces. One vector per field, all
//                  the same length; index i of every vector is flight i.
// - ResultTable:   rows zipped from the columns, plus the trip metadata.
//                  Built fresh per search, never stored.

use std::fmt;

use crate::{
    config::consts::{HEADERS, NO_SEATS},
    criteria::SearchCriteria,
    query::format_date,
};

/// Lowest promotional fare, or none on offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fare {
    Price(String),
    NoSeats,
}

impl Fare {
    pub fn as_str(&self) -> &str {
        match self {
            Fare::Price(p) => p,
            Fare::NoSeats => NO_SEATS,
        }
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightRow {
    pub departure_time: String,
    pub arrival_time: String,
    pub flight_no: String,
    pub duration: String,
    pub stops: String,
    pub fare: Fare,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightColumns {
    flight_numbers: Vec<String>,
    durations: Vec<String>,
    stops: Vec<String>,
    departure_times: Vec<String>,
    arrival_times: Vec<String>,
    prices: Vec<Fare>,
}

impl FlightColumns {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            flight_numbers: Vec::with_capacity(n),
            durations: Vec::with_capacity(n),
            stops: Vec::with_capacity(n),
            departure_times: Vec::with_capacity(n),
            arrival_times: Vec::with_capacity(n),
            prices: Vec::with_capacity(n),
        }
    }

    /// Append one flight to every column at once; the only mutator, so the
    /// columns cannot drift apart.
    pub fn push(&mut self, row: FlightRow) {
        self.flight_numbers.push(row.flight_no);
        self.durations.push(row.duration);
        self.stops.push(row.stops);
        self.departure_times.push(row.departure_time);
        self.arrival_times.push(row.arrival_time);
        self.prices.push(row.fare);
    }

    pub fn len(&self) -> usize {
        self.flight_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flight_numbers.is_empty()
    }

    pub fn flight_numbers(&self) -> &[String] {
        &self.flight_numbers
    }

    pub fn durations(&self) -> &[String] {
        &self.durations
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn departure_times(&self) -> &[String] {
        &self.departure_times
    }

    pub fn arrival_times(&self) -> &[String] {
        &self.arrival_times
    }

    pub fn prices(&self) -> &[Fare] {
        &self.prices
    }

    pub fn into_rows(self) -> Vec<FlightRow> {
        let Self {
            flight_numbers,
            durations,
            stops,
            departure_times,
            arrival_times,
            prices,
        } = self;
        flight_numbers
            .into_iter()
            .zip(durations)
            .zip(stops)
            .zip(departure_times)
            .zip(arrival_times)
            .zip(prices)
            .map(|(((((flight_no, duration), stops), departure_time), arrival_time), fare)| {
                FlightRow { departure_time, arrival_time, flight_no, duration, stops, fare }
            })
            .collect()
    }
}

/// "From" / "To" captions shared by every row of one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripMeta {
    pub from: String,
    pub to: String,
}

impl TripMeta {
    /// `"<departure> <origin>"` and `"<return> <destination>"`; a one-way
    /// trip has no return date, so `to` is just the destination.
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let from = format!("{} {}", format_date(criteria.departure()), criteria.origin());
        let to = match criteria.return_date() {
            Some(d) => format!("{} {}", format_date(d), criteria.destination()),
            None => s!(criteria.destination()),
        };
        Self { from, to }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTable {
    pub meta: TripMeta,
    pub rows: Vec<FlightRow>,
}

impl ResultTable {
    pub fn assemble(columns: FlightColumns, meta: TripMeta) -> Self {
        Self { meta, rows: columns.into_rows() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers() -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    /// One line per flight, the trip metadata repeated in the first two
    /// cells of every row (same shape as the site-facing table).
    pub fn to_string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    self.meta.from.clone(),
                    self.meta.to.clone(),
                    r.departure_time.clone(),
                    r.arrival_time.clone(),
                    r.flight_no.clone(),
                    r.duration.clone(),
                    r.stops.clone(),
                    s!(r.fare.as_str()),
                ]
            })
            .collect()
    }
}
