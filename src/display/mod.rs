//! Display formatting for terminal output
//!
//! Renders entry tables and bar charts as plain strings so that callers
//! decide where they are printed.

pub mod chart;
pub mod report;
pub mod table;

pub use chart::{render_bar_chart, BAR_MAX_WIDTH};
pub use table::render_table;
