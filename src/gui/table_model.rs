// src/gui/table_model.rs
//! Table Presenter model: what the central panel shows after a search.
//!
//! - `TableData` is the stringified result table (headers + rows) that
//!   `data_table.rs` renders and the Copy action serializes.
//! - `ResultView` is the outcome of the last search: nothing yet, a table,
//!   or a user-facing error. A failed search never leaves a table behind.

use crate::{
    data::{ResultTable, TripMeta},
    error::SearchError,
};

/// The table model used by the GUI
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn from_result(table: &ResultTable) -> Self {
        Self {
            headers: ResultTable::headers(),
            rows: table.to_string_rows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultView {
    /// No search issued yet
    #[default]
    Empty,
    Table { meta: TripMeta, data: TableData },
    Error(String),
}

impl ResultView {
    pub fn from_search(result: &Result<ResultTable, SearchError>) -> Self {
        match result {
            Ok(table) => ResultView::Table {
                meta: table.meta.clone(),
                data: TableData::from_result(table),
            },
            Err(e) => ResultView::Error(e.user_message()),
        }
    }

    pub fn table(&self) -> Option<&TableData> {
        match self {
            ResultView::Table { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResultView::Error(msg) => Some(msg),
            _ => None,
        }
    }
}
