//! The metrics shown in package benchmark reports.

use super::{Metric, SignificanceLevel};
use crate::core::{BenchmarkDocument, StatSummary};
use crate::report::format::{CellValue, FormatOptions};

/// Growth beyond this fraction is flagged as a warning
pub const PERCENT_DIFF_WARNING_THRESHOLD: f64 = 0.2;
/// Growth beyond this fraction is flagged as an alert
pub const PERCENT_DIFF_ALERT_THRESHOLD: f64 = 1.0;
/// Shrinkage beyond this fraction is celebrated
pub const PERCENT_DIFF_AWESOME_THRESHOLD: f64 = -0.2;

const BYTES_PER_MIB: f64 = 1_048_576.0;

const COUNT: FormatOptions = FormatOptions::with_precision(0);
const UNDIFFED_COUNT: FormatOptions = FormatOptions { no_diff: Some(true), ..COUNT };
const UNDIFFED_PERCENTAGE: FormatOptions =
    FormatOptions { percentage: Some(true), no_diff: Some(true), ..FormatOptions::NONE };

pub const MEMORY_USAGE: Metric = Metric {
    column_name: "Memory usage (MiB)",
    format_options: FormatOptions::with_precision(1),
    get_value: |doc| doc.body.memory_usage.map(|bytes| CellValue::Number(bytes / BYTES_PER_MIB)),
    get_significance: proportional_significance,
};

pub const TYPE_COUNT: Metric = Metric {
    column_name: "Type count",
    format_options: COUNT,
    get_value: |doc| Some(CellValue::Number(doc.body.type_count)),
    get_significance: proportional_significance,
};

pub const ASSIGNABILITY_CACHE_SIZE: Metric = Metric {
    column_name: "Assignability cache size",
    format_options: COUNT,
    get_value: |doc| {
        doc.body
            .relation_cache_sizes
            .as_ref()
            .map(|sizes| CellValue::Number(sizes.assignable))
    },
    get_significance: proportional_significance,
};

pub const SAMPLES_TAKEN: Metric = Metric {
    column_name: "Samples taken",
    format_options: UNDIFFED_COUNT,
    get_value: |doc| {
        Some(CellValue::Number(doc.body.completions.trials.max(doc.body.quick_info.trials)))
    },
    get_significance: insignificant,
};

pub const IDENTIFIER_COUNT: Metric = Metric {
    column_name: "Identifiers in tests",
    format_options: UNDIFFED_COUNT,
    get_value: |doc| Some(CellValue::Number(doc.body.test_identifier_count)),
    get_significance: insignificant,
};

pub const COMPLETIONS_MEAN: Metric = Metric {
    column_name: "Mean duration (ms)",
    format_options: FormatOptions::with_precision(1),
    get_value: |doc| Some(CellValue::Number(doc.body.completions.mean)),
    get_significance: |pd, _, _, before, after| {
        duration_significance(pd, &before.body.completions, &after.body.completions)
    },
};

pub const COMPLETIONS_AVG_CV: Metric = Metric {
    column_name: "Mean CV",
    format_options: UNDIFFED_PERCENTAGE,
    get_value: |doc| doc.body.completions.mean_coefficient_of_variation.map(CellValue::Number),
    get_significance: insignificant,
};

pub const COMPLETIONS_WORST_MEAN: Metric = Metric {
    column_name: "Worst duration (ms)",
    format_options: FormatOptions::with_precision(1),
    get_value: |doc| Some(CellValue::Number(doc.body.completions.worst.mean)),
    get_significance: |pd, _, _, before, after| {
        duration_significance(pd, &before.body.completions, &after.body.completions)
    },
};

pub const QUICK_INFO_MEAN: Metric = Metric {
    column_name: "Mean duration (ms)",
    format_options: FormatOptions::with_precision(1),
    get_value: |doc| Some(CellValue::Number(doc.body.quick_info.mean)),
    get_significance: |pd, _, _, before, after| {
        duration_significance(pd, &before.body.quick_info, &after.body.quick_info)
    },
};

pub const QUICK_INFO_AVG_CV: Metric = Metric {
    column_name: "Mean CV",
    format_options: UNDIFFED_PERCENTAGE,
    get_value: |doc| doc.body.quick_info.mean_coefficient_of_variation.map(CellValue::Number),
    get_significance: insignificant,
};

pub const QUICK_INFO_WORST_MEAN: Metric = Metric {
    column_name: "Worst duration (ms)",
    format_options: FormatOptions::with_precision(1),
    get_value: |doc| Some(CellValue::Number(doc.body.quick_info.worst.mean)),
    get_significance: |pd, _, _, before, after| {
        duration_significance(pd, &before.body.quick_info, &after.body.quick_info)
    },
};

fn insignificant(
    _percent_diff: f64,
    _before_value: f64,
    _after_value: f64,
    _before: &BenchmarkDocument,
    _after: &BenchmarkDocument,
) -> Option<SignificanceLevel> {
    None
}

fn proportional_significance(
    percent_diff: f64,
    _before_value: f64,
    _after_value: f64,
    _before: &BenchmarkDocument,
    _after: &BenchmarkDocument,
) -> Option<SignificanceLevel> {
    classify_percent_diff(percent_diff)
}

/// Threshold classification shared by every diffed metric.
pub fn classify_percent_diff(percent_diff: f64) -> Option<SignificanceLevel> {
    if percent_diff.is_nan() {
        None
    } else if percent_diff > PERCENT_DIFF_ALERT_THRESHOLD {
        Some(SignificanceLevel::Alert)
    } else if percent_diff > PERCENT_DIFF_WARNING_THRESHOLD {
        Some(SignificanceLevel::Warning)
    } else if percent_diff < PERCENT_DIFF_AWESOME_THRESHOLD {
        Some(SignificanceLevel::Awesome)
    } else {
        None
    }
}

/// Timings are noisy: a change no larger than the run-to-run variation of
/// either measurement is not reported.
fn duration_significance(
    percent_diff: f64,
    before: &StatSummary,
    after: &StatSummary,
) -> Option<SignificanceLevel> {
    let noise = before
        .mean_coefficient_of_variation
        .unwrap_or(0.0)
        .max(after.mean_coefficient_of_variation.unwrap_or(0.0));
    if percent_diff.abs() <= noise {
        return None;
    }
    classify_percent_diff(percent_diff)
}
