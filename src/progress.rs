// src/progress.rs
/// Lightweight progress reporting for a search.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the request URL is known, before any network traffic.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end: `Some(rows)` on success, `None` on failure.
    fn finish(&mut self, _rows: Option<usize>) {}
}

/// Console notices on stderr, so stdout stays clean for the table.
pub struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn finish(&mut self, rows: Option<usize>) {
        if let Some(n) = rows {
            eprintln!("Found {n} flight(s)");
        }
    }
}
