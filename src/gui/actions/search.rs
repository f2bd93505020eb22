// src/gui/actions/search.rs
use crate::{
    core::net::HttpFetcher,
    error::SearchError,
    gui::{
        app::{App, Phase},
        progress::GuiProgress,
        table_model::ResultView,
    },
    progress::Progress,
    runner,
};

pub fn search(app: &mut App) {
    // Snapshot the form; the search never sees later edits.
    let criteria = match app.state.gui.criteria() {
        Ok(c) => c,
        Err(e) => {
            logd!("Search: Rejected form: {}", e);
            let err = SearchError::from(e);
            app.view = ResultView::Error(err.user_message());
            app.status(err.user_message());
            return;
        }
    };

    app.phase = Phase::Searching;
    let mut prog = GuiProgress::new(app.status.clone());

    // → Blocks the UI thread until the page is back ←
    let result = match HttpFetcher::new() {
        Ok(fetcher) => {
            runner::search(&criteria, &app.state.options.search, &fetcher, Some(&mut prog))
        }
        Err(e) => {
            loge!("Search: HTTP client unavailable: {}", runner::error_chain(&e));
            prog.finish(None);
            Err(SearchError::from(e))
        }
    };

    app.view = ResultView::from_search(&result);
    app.phase = Phase::Idle;
}
