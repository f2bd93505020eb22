// src/config/consts.rs

pub const APP_NAME: &str = "flight_scrape";
pub const APP_TITLE: &str = "Precision Air Flight Search";

// Net config
pub const BASE_URL: &str = "https://book-precision.crane.aero/ibe/availability";
pub const BASE_URL_ENV: &str = "FLIGHT_SCRAPE_BASE_URL";
pub const USER_AGENT: &str = concat!("flight_scrape/", env!("CARGO_PKG_VERSION"));

// Query
pub const CURRENCY: &str = "USD";
pub const LANG: &str = "en";
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// Search form defaults
pub const DEFAULT_ORIGIN: &str = "DAR";
pub const DEFAULT_DESTINATION: &str = "ARK";
pub const MAX_PASSENGERS: u32 = 9;

// Results
pub const NO_SEATS: &str = "No Seats";
pub const SEARCH_FAILED_MSG: &str =
    "Failed to retrieve flight data. Please check the URL and try again.";
pub const COLLECTING_MSG: &str = "Collecting the Data for Scraping...";
pub const HEADERS: [&str; 8] = [
    "From",
    "To",
    "Departure Time",
    "Arrival Time",
    "Flight no",
    "Duration",
    "Total Stops",
    "Lowest Fare Details",
];

// Logging
pub const DEFAULT_LOG_FILTER: &str = "flight_scrape=info";
