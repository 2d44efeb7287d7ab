//! Single-run table.

use crate::config::RepositoryConfig;
use crate::core::BenchmarkDocument;
use crate::metrics;

use super::format::FormatOptions;
use super::rows::{
    section, single_run_row, single_run_row_from_metric, system_rows, worst_completion,
    worst_identifier_link, worst_quick_info,
};
use super::table::{Row, render_markdown_table};

/// Rows of the single-run table. The first row is the first section label,
/// which doubles as the markdown header.
pub fn single_run_rows(benchmark: &BenchmarkDocument, repo: &RepositoryConfig) -> Vec<Row> {
    let nested = FormatOptions::with_indent(1);
    let none = FormatOptions::NONE;
    let metric_row =
        |metric: &metrics::Metric, options: &FormatOptions| single_run_row_from_metric(metric, benchmark, options);

    // Memory usage is not shown for single runs.
    let mut rows = vec![
        section("Batch compilation"),
        metric_row(&metrics::TYPE_COUNT, &none),
        metric_row(&metrics::ASSIGNABILITY_CACHE_SIZE, &none),
        Vec::new(),
        section("Language service measurements"),
        metric_row(&metrics::SAMPLES_TAKEN, &none),
        metric_row(&metrics::IDENTIFIER_COUNT, &none),
        section("`getCompletionsAtPosition`"),
        metric_row(&metrics::COMPLETIONS_MEAN, &nested),
        metric_row(&metrics::COMPLETIONS_AVG_CV, &nested),
        metric_row(&metrics::COMPLETIONS_WORST_MEAN, &nested),
        single_run_row(
            "Worst identifier",
            benchmark,
            |doc| Some(worst_identifier_link(repo, doc, worst_completion)),
            &nested,
        ),
        section("`getQuickInfoAtPosition`"),
        metric_row(&metrics::QUICK_INFO_MEAN, &nested),
        metric_row(&metrics::QUICK_INFO_AVG_CV, &nested),
        metric_row(&metrics::QUICK_INFO_WORST_MEAN, &nested),
        single_run_row(
            "Worst identifier",
            benchmark,
            |doc| Some(worst_identifier_link(repo, doc, worst_quick_info)),
            &nested,
        ),
        Vec::new(),
        section("System information"),
    ];
    rows.extend(system_rows(|title, get, options| single_run_row(title, benchmark, get, options)));
    rows
}

/// Render the measurements of a single benchmark document.
pub fn create_single_run_table(benchmark: &BenchmarkDocument, repo: &RepositoryConfig) -> String {
    render_markdown_table(&single_run_rows(benchmark, repo))
}
