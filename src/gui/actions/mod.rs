// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,search}.

mod copy;    // src/gui/actions/copy.rs
mod search;  // src/gui/actions/search.rs

pub use copy::copy;
pub use search::search;
