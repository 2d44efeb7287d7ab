//! Metric descriptors and significance classification.
//!
//! A [`Metric`] knows how to pull one value out of a [`BenchmarkDocument`],
//! how that value is formatted by default, and how notable a change in it is.

pub mod catalog;

use crate::core::BenchmarkDocument;
use crate::report::format::{CellValue, FormatOptions};

pub use catalog::*;

/// How notable a percent difference is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceLevel {
    Warning,
    Alert,
    Awesome,
}

/// Reads a metric value from a document.
pub type ValueFn = fn(&BenchmarkDocument) -> Option<CellValue>;

/// Classifies a change: `(percent_diff, before_value, after_value, before, after)`.
pub type SignificanceFn =
    fn(f64, f64, f64, &BenchmarkDocument, &BenchmarkDocument) -> Option<SignificanceLevel>;

/// A named, formatted, classified measurement.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub column_name: &'static str,
    pub format_options: FormatOptions,
    pub get_value: ValueFn,
    pub get_significance: SignificanceFn,
}

impl Metric {
    pub fn value(&self, doc: &BenchmarkDocument) -> Option<CellValue> {
        (self.get_value)(doc)
    }

    pub fn significance(
        &self,
        percent_diff: f64,
        before_value: f64,
        after_value: f64,
        before: &BenchmarkDocument,
        after: &BenchmarkDocument,
    ) -> Option<SignificanceLevel> {
        (self.get_significance)(percent_diff, before_value, after_value, before, after)
    }
}
