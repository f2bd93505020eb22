// src/specs/availability.rs
//
// Field Extractor for the IBE availability page.
//
// The page renders flights as two independent block lists: one "info row"
// per flight (times, number, duration, stops) and one "fare container" per
// flight (cabin offers). Nothing links a fare container to its info row
// except position, so rows are paired by index and the shorter list wins.

use scraper::{ElementRef, Html, Selector};

use crate::{
    core::{
        html::{class_selector, first_text, text_of},
        sanitize::normalize_ws,
    },
    data::{Fare, FlightColumns, FlightRow},
    error::ExtractError,
};

pub const DETAIL_BLOCK: &str = "info-row col-12";
pub const FARE_BLOCK: &str = "fare-container col-12 col-lg-8 col-xl-8";
pub const FLIGHT_NO: &str = "flight-no";
pub const DURATION: &str = "flight-duration";
pub const TOTAL_STOP: &str = "total-stop";
pub const TIME: &str = "time";
pub const PROMO_FARE: &str = "offer-info-block cabin-name-PROMOTION";

struct Selectors {
    detail: Selector,
    fare: Selector,
    flight_no: Selector,
    duration: Selector,
    stops: Selector,
    time: Selector,
    promo: Selector,
}

impl Selectors {
    fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            detail: class_selector(None, DETAIL_BLOCK)?,
            fare: class_selector(None, FARE_BLOCK)?,
            flight_no: class_selector(None, FLIGHT_NO)?,
            duration: class_selector(None, DURATION)?,
            stops: class_selector(None, TOTAL_STOP)?,
            time: class_selector(Some("span"), TIME)?,
            promo: class_selector(None, PROMO_FARE)?,
        })
    }
}

/// Parse an availability page into aligned columns.
///
/// Output length is `min(detail blocks, fare blocks)`. A fare block without
/// a promotional offer yields `Fare::NoSeats`. A detail block missing its
/// flight number, duration, stops or either time fails the whole page.
pub fn extract(body: &str) -> Result<FlightColumns, ExtractError> {
    let sel = Selectors::new()?;
    let doc = Html::parse_document(body);

    let details: Vec<ElementRef<'_>> = doc.select(&sel.detail).collect();
    let fares: Vec<ElementRef<'_>> = doc.select(&sel.fare).collect();

    let bound = details.len().min(fares.len());
    if details.len() != fares.len() {
        logd!(
            "Extract: block count mismatch details={} fares={}, keeping {}",
            details.len(),
            fares.len(),
            bound
        );
    }

    let mut cols = FlightColumns::with_capacity(bound);
    for (row, (detail, fare)) in details.into_iter().zip(fares).enumerate() {
        cols.push(extract_row(&sel, row, detail, fare)?);
    }

    logd!("Extract: rows={}", cols.len());
    Ok(cols)
}

fn extract_row(
    sel: &Selectors,
    row: usize,
    detail: ElementRef<'_>,
    fare: ElementRef<'_>,
) -> Result<FlightRow, ExtractError> {
    let missing = |element| ExtractError::MissingElement { row, element };

    let flight_no = first_text(detail, &sel.flight_no).ok_or_else(|| missing("flight number"))?;
    let duration = first_text(detail, &sel.duration).ok_or_else(|| missing("duration"))?;
    let stops = first_text(detail, &sel.stops).ok_or_else(|| missing("stops"))?;

    let mut times = detail.select(&sel.time).map(|t| text_of(t).trim().to_string());
    let departure_time = times.next().ok_or_else(|| missing("departure time"))?;
    let arrival_time = times.next().ok_or_else(|| missing("arrival time"))?;

    Ok(FlightRow {
        departure_time,
        arrival_time,
        flight_no,
        duration,
        stops,
        fare: lowest_fare(sel, fare),
    })
}

fn lowest_fare(sel: &Selectors, fare: ElementRef<'_>) -> Fare {
    match fare.select(&sel.promo).next() {
        Some(offer) => Fare::Price(normalize_ws(&text_of(offer))),
        None => Fare::NoSeats,
    }
}
