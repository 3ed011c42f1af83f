//! PackPlanner command-line front end.
//!
//! This crate provides:
//! - A streaming reader that splits line-delimited input into batches
//! - Text and JSON report rendering for packed batches
//! - A runner tying input, packing and output together

mod config;
mod parser;
mod report;
mod runner;

pub use config::{InputSource, OutputFormat, RunConfig};
pub use parser::{parse_header, parse_item, Batch, BatchReader};
pub use report::{format_float, render_text, write_json, write_text, BatchReport};
pub use runner::{RunStats, Runner};
