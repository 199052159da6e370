//! Output formatting for VLAN plans.
//!
//! - [`report`] - plan table and JSON rendering
//! - [`terminal`] - field formatting helpers

mod report;
mod terminal;

pub use report::{block_rows, print_report, report_json, BlockPrintRow, PlanReport};
pub use terminal::format_field;
