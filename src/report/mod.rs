//! Markdown report tables for benchmark documents.
//!
//! This module provides:
//! - Cell formatting with precision, percentages and significance markers
//! - Row builders for metrics and ad hoc values
//! - The comparison and single-run tables posted to PR comments

pub mod comparison;
pub mod format;
pub mod rows;
pub mod single;
pub mod table;

// Re-export key types
pub use comparison::{comparison_rows, create_comparison_table};
pub use format::{CellValue, FormatOptions, format_diff, format_value, indent, percent_diff};
pub use single::{create_single_run_table, single_run_rows};
pub use table::{Row, render_markdown_table};
