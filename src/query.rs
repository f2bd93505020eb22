// src/query.rs
//! Query Builder: `SearchCriteria` → availability-page URL.

use reqwest::Url;

use crate::{
    config::{consts::DATE_FORMAT, options::SearchOptions},
    criteria::SearchCriteria,
    error::QueryError,
};

/// Ordered (name, value) pairs, in the order the site's own form sends them.
pub type QueryParams = Vec<(&'static str, String)>;

pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn build_params(criteria: &SearchCriteria, opts: &SearchOptions) -> QueryParams {
    let pax = criteria.passengers();
    let return_date = criteria.return_date().map(format_date).unwrap_or_default();

    vec![
        ("tripType", s!(criteria.trip_type().token())),
        ("depPort", s!(criteria.origin())),
        ("arrPort", s!(criteria.destination())),
        ("departureDate", format_date(criteria.departure())),
        ("returnDate", return_date),
        ("passengerQuantities[0][passengerType]", s!("ADLT")),
        ("passengerQuantities[0][quantity]", pax.adults.to_string()),
        ("passengerQuantities[1][passengerType]", s!("CHILD")),
        ("passengerQuantities[1][quantity]", pax.children.to_string()),
        ("passengerQuantities[2][passengerType]", s!("INFT")),
        ("passengerQuantities[2][quantity]", pax.infants.to_string()),
        ("currency", opts.currency.clone()),
        ("lang", opts.lang.clone()),
    ]
}

/// Base URL plus percent-encoded query string.
pub fn build_url(criteria: &SearchCriteria, opts: &SearchOptions) -> Result<Url, QueryError> {
    let params = build_params(criteria, opts);
    Url::parse_with_params(&opts.base_url, params.iter().map(|(k, v)| (*k, v.as_str())))
        .map_err(|e| QueryError::BaseUrl {
            url: opts.base_url.clone(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::Passengers;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn value<'a>(params: &'a QueryParams, name: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    fn dar_ark_one_way() -> SearchCriteria {
        SearchCriteria::one_way("DAR", "ARK", day(2024, 10, 11), Passengers::default()).unwrap()
    }

    #[test]
    fn one_way_has_empty_return_date() {
        let c = dar_ark_one_way();
        let p = build_params(&c, &SearchOptions::default());
        assert_eq!(value(&p, "tripType"), "ONE_WAY");
        assert_eq!(value(&p, "departureDate"), "11/10/2024");
        assert_eq!(value(&p, "returnDate"), "");
    }

    #[test]
    fn round_trip_formats_both_dates() {
        let pax = Passengers::new(2, 1, 1);
        let c = SearchCriteria::round_trip("DAR", "ZNZ", day(2024, 3, 5), day(2024, 3, 6), pax)
            .unwrap();
        let p = build_params(&c, &SearchOptions::default());
        assert_eq!(value(&p, "tripType"), "ROUND_TRIP");
        assert_eq!(value(&p, "departureDate"), "05/03/2024");
        assert_eq!(value(&p, "returnDate"), "06/03/2024");
        assert_eq!(value(&p, "passengerQuantities[0][quantity]"), "2");
        assert_eq!(value(&p, "passengerQuantities[1][quantity]"), "1");
        assert_eq!(value(&p, "passengerQuantities[2][quantity]"), "1");
    }

    #[test]
    fn parameter_order_and_fixed_values() {
        let c = dar_ark_one_way();
        let p = build_params(&c, &SearchOptions::default());
        let names: Vec<&str> = p.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            names,
            vec![
                "tripType",
                "depPort",
                "arrPort",
                "departureDate",
                "returnDate",
                "passengerQuantities[0][passengerType]",
                "passengerQuantities[0][quantity]",
                "passengerQuantities[1][passengerType]",
                "passengerQuantities[1][quantity]",
                "passengerQuantities[2][passengerType]",
                "passengerQuantities[2][quantity]",
                "currency",
                "lang",
            ]
        );
        assert_eq!(value(&p, "passengerQuantities[1][passengerType]"), "CHILD");
        assert_eq!(value(&p, "currency"), "USD");
        assert_eq!(value(&p, "lang"), "en");
    }

    #[test]
    fn url_is_percent_encoded() {
        let c = dar_ark_one_way();
        let url = build_url(&c, &SearchOptions::default()).unwrap();
        let s = url.as_str();
        assert!(s.starts_with(
            "https://book-precision.crane.aero/ibe/availability?tripType=ONE_WAY&"
        ));
        assert!(s.contains("departureDate=11%2F10%2F2024"));
        assert!(s.contains("passengerQuantities%5B0%5D%5BpassengerType%5D=ADLT"));
        assert!(s.contains("returnDate=&"));
    }

    #[test]
    fn bad_base_url_is_an_error() {
        let c = dar_ark_one_way();
        let opts = SearchOptions { base_url: s!("not a url"), ..SearchOptions::default() };
        assert!(matches!(build_url(&c, &opts), Err(QueryError::BaseUrl { .. })));
    }
}
