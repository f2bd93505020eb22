// src/runner.rs
//
// The whole pipeline for one search:
// criteria → URL → one GET → extract → table.
// Front ends own nothing but the inputs and the rendering.

use crate::{
    config::{consts::COLLECTING_MSG, options::SearchOptions},
    core::net::Fetch,
    criteria::SearchCriteria,
    data::{ResultTable, TripMeta},
    error::SearchError,
    progress::Progress,
    query, specs,
};

/// Run one search. `progress` can be None (no UI updates).
pub fn search(
    criteria: &SearchCriteria,
    opts: &SearchOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ResultTable, SearchError> {
    let result = run_pipeline(criteria, opts, fetcher, progress.as_deref_mut());

    match &result {
        Ok(table) => logf!("Search: OK rows={}", table.len()),
        Err(e) => loge!("Search: Error: {}", error_chain(e)),
    }
    if let Some(p) = progress {
        p.finish(result.as_ref().ok().map(ResultTable::len));
    }
    result
}

fn run_pipeline(
    criteria: &SearchCriteria,
    opts: &SearchOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ResultTable, SearchError> {
    let url = query::build_url(criteria, opts)?;
    logf!(
        "Search: Begin {} {} → {} dep={} ret={:?}",
        criteria.trip_type(),
        criteria.origin(),
        criteria.destination(),
        criteria.departure(),
        criteria.return_date()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.begin(url.as_str());
    }
    let page = fetcher.fetch(&url)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(COLLECTING_MSG);
    }

    let columns = specs::availability::extract(&page.body)?;
    Ok(ResultTable::assemble(columns, TripMeta::from_criteria(criteria)))
}

/// "outer: inner: innermost", for log lines.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cur = e.source();
    }
    out
}
