// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod config;
pub mod core;
pub mod specs;

pub mod criteria;
pub mod csv;
pub mod data;
pub mod error;
pub mod gui;
pub mod progress;
pub mod query;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
