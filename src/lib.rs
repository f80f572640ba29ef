// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod dashboard;
pub mod day;
pub mod error;
pub mod file;
pub mod inject;
pub mod progress;
pub mod render;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use csv::{ParseOptions, Record, parse_records};
pub use error::{Error, Result};
