// src/error.rs
use thiserror::Error;

use crate::config::consts::SEARCH_FAILED_MSG;

/// Rejected search input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("at least one adult passenger is required")]
    NoAdults,
    #[error("a round-trip search needs a return date")]
    MissingReturnDate,
    #[error("a one-way search cannot carry a return date")]
    UnexpectedReturnDate,
    #[error("unknown trip type: {0}")]
    UnknownTripType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid base URL `{url}`: {reason}")]
    BaseUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("could not read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("bad selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
    /// A flight block lacks an element every row must have.
    #[error("flight row {row}: missing {element}")]
    MissingElement { row: usize, element: &'static str },
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Criteria(#[from] CriteriaError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

impl SearchError {
    /// What the user gets to see. Input problems are worth spelling out;
    /// anything past that is reported generically (details go to the log).
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Criteria(e) => e.to_string(),
            _ => s!(SEARCH_FAILED_MSG),
        }
    }
}
