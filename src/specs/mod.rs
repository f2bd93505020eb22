// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec covers one remote page and
//! encodes *where the data lives in the HTML* and *how to pull it out*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page body (no network, no UI).
//! - **Selector choice**: the class names the booking site renders today.
//! - **Light shaping** into `data::FlightColumns`.
//!
//! ## What does **not** live here
//! - Building the request or fetching it (`query`, `core::net`).
//! - Presentation (`data::ResultTable`, `gui`, `cli`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner::search → query::build_url → Fetch::fetch
//!                            ↘ specs::availability::extract → ResultTable
//! ```
//!
//! ## Testing notes
//! Specs are testable offline against inline HTML fixtures; see
//! `tests/extract_scenarios.rs`.
pub mod availability;
