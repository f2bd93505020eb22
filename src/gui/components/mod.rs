// src/gui/components/mod.rs
pub mod data_table;
pub mod results;
pub mod search_panel;
