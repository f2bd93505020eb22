// src/criteria.rs
//! Immutable description of one flight search.
//!
//! Front ends (GUI form, CLI flags) build a `SearchCriteria` and hand it to
//! `runner::search`. The constructors enforce the only rules we own:
//! a return date exists exactly when the trip is a round trip, and at least
//! one adult travels. Airport codes and dates are passed through as given;
//! the booking site decides whether they make sense.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::error::CriteriaError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    pub const ALL: [TripType; 2] = [TripType::OneWay, TripType::RoundTrip];

    /// Value of the `tripType` query parameter.
    pub fn token(self) -> &'static str {
        match self {
            TripType::OneWay => "ONE_WAY",
            TripType::RoundTrip => "ROUND_TRIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TripType::OneWay => "One Way",
            TripType::RoundTrip => "Round Trip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TripType {
    type Err = CriteriaError;

    /// Accepts labels, query tokens and kebab-case ("one-way").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "oneway" => Ok(TripType::OneWay),
            "roundtrip" | "return" => Ok(TripType::RoundTrip),
            _ => Err(CriteriaError::UnknownTripType(s!(s))),
        }
    }
}

/// Passenger counts per fare category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Passengers {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for Passengers {
    fn default() -> Self {
        Self { adults: 1, children: 0, infants: 0 }
    }
}

impl Passengers {
    pub fn new(adults: u32, children: u32, infants: u32) -> Self {
        Self { adults, children, infants }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    trip_type: TripType,
    origin: String,
    destination: String,
    departure: NaiveDate,
    return_date: Option<NaiveDate>,
    passengers: Passengers,
}

impl SearchCriteria {
    pub fn new(
        trip_type: TripType,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDate,
        return_date: Option<NaiveDate>,
        passengers: Passengers,
    ) -> Result<Self, CriteriaError> {
        match (trip_type, return_date) {
            (TripType::RoundTrip, None) => return Err(CriteriaError::MissingReturnDate),
            (TripType::OneWay, Some(_)) => return Err(CriteriaError::UnexpectedReturnDate),
            _ => {}
        }
        if passengers.adults < 1 {
            return Err(CriteriaError::NoAdults);
        }
        Ok(Self {
            trip_type,
            origin: origin.into(),
            destination: destination.into(),
            departure,
            return_date,
            passengers,
        })
    }

    pub fn one_way(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDate,
        passengers: Passengers,
    ) -> Result<Self, CriteriaError> {
        Self::new(TripType::OneWay, origin, destination, departure, None, passengers)
    }

    pub fn round_trip(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveDate,
        return_date: NaiveDate,
        passengers: Passengers,
    ) -> Result<Self, CriteriaError> {
        Self::new(
            TripType::RoundTrip,
            origin,
            destination,
            departure,
            Some(return_date),
            passengers,
        )
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> NaiveDate {
        self.departure
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    pub fn passengers(&self) -> Passengers {
        self.passengers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn return_date_only_with_round_trip() {
        let dep = day(2024, 10, 11);
        let pax = Passengers::default();

        let err =
            SearchCriteria::new(TripType::RoundTrip, "DAR", "ARK", dep, None, pax).unwrap_err();
        assert_eq!(err, CriteriaError::MissingReturnDate);

        let err =
            SearchCriteria::new(TripType::OneWay, "DAR", "ARK", dep, Some(dep), pax).unwrap_err();
        assert_eq!(err, CriteriaError::UnexpectedReturnDate);

        let ret = day(2024, 10, 12);
        let ok = SearchCriteria::round_trip("DAR", "ARK", dep, ret, pax).unwrap();
        assert_eq!(ok.return_date(), Some(day(2024, 10, 12)));
    }

    #[test]
    fn needs_an_adult() {
        let err = SearchCriteria::one_way("DAR", "ARK", day(2024, 1, 1), Passengers::new(0, 2, 1))
            .unwrap_err();
        assert_eq!(err, CriteriaError::NoAdults);
    }

    #[test]
    fn codes_pass_through_untouched() {
        let c = SearchCriteria::one_way(" dar ", "zz9", day(2024, 1, 1), Passengers::default())
            .unwrap();
        assert_eq!(c.origin(), " dar ");
        assert_eq!(c.destination(), "zz9");
    }

    #[test]
    fn trip_type_parsing() {
        assert_eq!("one-way".parse::<TripType>().unwrap(), TripType::OneWay);
        assert_eq!("One Way".parse::<TripType>().unwrap(), TripType::OneWay);
        assert_eq!("ROUND_TRIP".parse::<TripType>().unwrap(), TripType::RoundTrip);
        assert!("multi-city".parse::<TripType>().is_err());
    }
}
