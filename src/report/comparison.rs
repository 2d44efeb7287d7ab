//! Before/after comparison table.

use tracing::debug;

use crate::config::RepositoryConfig;
use crate::core::{BenchmarkDocument, supports_memory_usage};
use crate::metrics;

use super::format::FormatOptions;
use super::rows::{
    comparison_row, comparison_row_from_metric, section, system_rows, worst_completion,
    worst_identifier_link, worst_quick_info,
};
use super::table::{Row, render_markdown_table};

/// Rows of the comparison table, header first.
///
/// `None` entries are rows that do not apply to these documents and are
/// dropped; empty rows are kept as blank separator lines.
pub fn comparison_rows(
    before: &BenchmarkDocument,
    after: &BenchmarkDocument,
    before_title: &str,
    after_title: &str,
    repo: &RepositoryConfig,
) -> Vec<Row> {
    let nested = FormatOptions::with_indent(1);
    let none = FormatOptions::NONE;
    let metric_row =
        |metric: &metrics::Metric, options: &FormatOptions| comparison_row_from_metric(metric, before, after, options);

    let memory_usage = if supports_memory_usage(before) && supports_memory_usage(after) {
        Some(metric_row(&metrics::MEMORY_USAGE, &none))
    } else {
        debug!("omitting memory usage: not recorded by both documents");
        None
    };

    let mut rows: Vec<Option<Row>> = vec![
        Some(vec![String::new(), before_title.to_string(), after_title.to_string(), "diff".to_string()]),
        Some(section("Batch compilation")),
        memory_usage,
        Some(metric_row(&metrics::TYPE_COUNT, &none)),
        Some(metric_row(&metrics::ASSIGNABILITY_CACHE_SIZE, &none)),
        Some(Vec::new()),
        Some(section("Language service")),
        Some(metric_row(&metrics::SAMPLES_TAKEN, &none)),
        Some(metric_row(&metrics::IDENTIFIER_COUNT, &none)),
        Some(section("`getCompletionsAtPosition`")),
        Some(metric_row(&metrics::COMPLETIONS_MEAN, &nested)),
        Some(metric_row(&metrics::COMPLETIONS_AVG_CV, &nested)),
        Some(metric_row(&metrics::COMPLETIONS_WORST_MEAN, &nested)),
        Some(comparison_row(
            "Worst identifier",
            before,
            after,
            |doc| Some(worst_identifier_link(repo, doc, worst_completion)),
            None,
            &nested,
        )),
        Some(section("`getQuickInfoAtPosition`")),
        Some(metric_row(&metrics::QUICK_INFO_MEAN, &nested)),
        Some(metric_row(&metrics::QUICK_INFO_AVG_CV, &nested)),
        Some(metric_row(&metrics::QUICK_INFO_WORST_MEAN, &nested)),
        Some(comparison_row(
            "Worst identifier",
            before,
            after,
            |doc| Some(worst_identifier_link(repo, doc, worst_quick_info)),
            None,
            &nested,
        )),
    ];

    // Environment details only matter when the runs were on different machines
    if before.system.same_environment(&after.system) {
        debug!(hash = %before.system.hash(), "omitting system information: identical environments");
    } else {
        rows.push(Some(Vec::new()));
        rows.push(Some(section("System information")));
        rows.extend(
            system_rows(|title, get, options| comparison_row(title, before, after, get, None, options))
                .into_iter()
                .map(Some),
        );
    }

    rows.into_iter().flatten().collect()
}

/// Render a before/after comparison of two benchmark documents.
pub fn create_comparison_table(
    before: &BenchmarkDocument,
    after: &BenchmarkDocument,
    before_title: &str,
    after_title: &str,
    repo: &RepositoryConfig,
) -> String {
    render_markdown_table(&comparison_rows(before, after, before_title, after_title, repo))
}
