// tests/pipeline.rs
//
// runner::search end to end, with the network swapped for canned pages.
mod common;

use std::cell::RefCell;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use reqwest::Url;

use flight_scrape::{
    config::{consts::SEARCH_FAILED_MSG, options::SearchOptions},
    core::net::{Fetch, RawPage},
    criteria::{Passengers, SearchCriteria},
    error::{FetchError, SearchError},
    gui::table_model::ResultView,
    progress::Progress,
    runner,
};

enum Canned {
    Page(String),
    Status(u16),
}

/// Answers every request with the same canned response; remembers URLs.
struct CannedFetcher {
    reply: Canned,
    seen: RefCell<Vec<String>>,
}

impl CannedFetcher {
    fn new(reply: Canned) -> Self {
        Self { reply, seen: RefCell::new(Vec::new()) }
    }
}

impl Fetch for CannedFetcher {
    fn fetch(&self, url: &Url) -> Result<RawPage, FetchError> {
        self.seen.borrow_mut().push(url.to_string());
        match &self.reply {
            Canned::Page(body) => Ok(RawPage { url: url.to_string(), body: body.clone() }),
            Canned::Status(code) => Err(FetchError::Status {
                url: url.to_string(),
                status: *code,
            }),
        }
    }
}

#[derive(Default)]
struct Recorder {
    began: Option<String>,
    messages: Vec<String>,
    finished: Option<Option<usize>>,
}

impl Progress for Recorder {
    fn begin(&mut self, url: &str) {
        self.began = Some(url.to_string());
    }

    fn log(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish(&mut self, rows: Option<usize>) {
        self.finished = Some(rows);
    }
}

fn criteria() -> SearchCriteria {
    let dep = NaiveDate::from_ymd_opt(2024, 10, 11).unwrap();
    let ret = NaiveDate::from_ymd_opt(2024, 10, 12).unwrap();
    SearchCriteria::round_trip("DAR", "ARK", dep, ret, Passengers::new(2, 0, 1)).unwrap()
}

#[test]
fn successful_search_builds_table_with_metadata() {
    let fetcher = CannedFetcher::new(Canned::Page(common::standard_page(3, 3)));
    let mut rec = Recorder::default();

    let table =
        runner::search(&criteria(), &SearchOptions::default(), &fetcher, Some(&mut rec)).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.meta.from, "11/10/2024 DAR");
    assert_eq!(table.meta.to, "12/10/2024 ARK");

    let rows = table.to_string_rows();
    assert!(rows.iter().all(|r| r[0] == "11/10/2024 DAR" && r[1] == "12/10/2024 ARK"));

    let seen = fetcher.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("tripType=ROUND_TRIP"));
    assert!(seen[0].contains("returnDate=12%2F10%2F2024"));

    assert_eq!(rec.began.as_deref(), Some(seen[0].as_str()));
    assert_eq!(rec.messages, vec!["Collecting the Data for Scraping...".to_string()]);
    assert_eq!(rec.finished, Some(Some(3)));
}

#[test]
fn non_200_shows_error_and_no_table() {
    let fetcher = CannedFetcher::new(Canned::Status(503));
    let mut rec = Recorder::default();

    let result = runner::search(&criteria(), &SearchOptions::default(), &fetcher, Some(&mut rec));
    assert!(matches!(
        result,
        Err(SearchError::Fetch(FetchError::Status { status: 503, .. }))
    ));
    assert_eq!(rec.finished, Some(None));
    assert!(rec.began.is_some());
    assert!(rec.messages.is_empty(), "no collecting notice after a failed fetch");

    let view = ResultView::from_search(&result);
    assert_eq!(view.error(), Some(SEARCH_FAILED_MSG));
    assert!(view.table().is_none());
}

#[test]
fn malformed_page_aborts_without_partial_rows() {
    let body = common::standard_page(2, 2).replacen(r#"<span class="time">"#, "<span>", 1);
    let fetcher = CannedFetcher::new(Canned::Page(body));

    let result = runner::search(&criteria(), &SearchOptions::default(), &fetcher, None);
    assert!(matches!(result, Err(SearchError::Extract(_))));
    assert!(ResultView::from_search(&result).table().is_none());
}

#[test]
fn bad_base_url_never_reaches_the_network() {
    let fetcher = CannedFetcher::new(Canned::Page(String::new()));
    let opts = SearchOptions {
        base_url: "::not a url::".to_string(),
        ..SearchOptions::default()
    };

    let result = runner::search(&criteria(), &opts, &fetcher, None);
    assert!(matches!(result, Err(SearchError::Query(_))));
    assert!(fetcher.seen.borrow().is_empty());
}

#[test]
fn each_search_starts_fresh() {
    let fetcher = CannedFetcher::new(Canned::Page(common::standard_page(2, 2)));
    let a = runner::search(&criteria(), &SearchOptions::default(), &fetcher, None).unwrap();
    let b = runner::search(&criteria(), &SearchOptions::default(), &fetcher, None).unwrap();
    assert_eq!(a, b);
    assert_eq!(fetcher.seen.borrow().len(), 2);
}
