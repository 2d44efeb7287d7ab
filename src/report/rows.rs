//! Row builders shared by the comparison and single-run tables.

use crate::config::RepositoryConfig;
use crate::core::{BenchmarkDocument, LanguageServiceSample};
use crate::metrics::Metric;

use super::format::{CellValue, FormatOptions, format_diff, format_value, indent, percent_diff};
use super::table::Row;

/// `[title, before, after, diff]`; the diff is computed from the metric's
/// values and significance classifier unless the metric opts out.
pub fn comparison_row_from_metric(
    metric: &Metric,
    before: &BenchmarkDocument,
    after: &BenchmarkDocument,
    overrides: &FormatOptions,
) -> Row {
    let options = metric.format_options.merged(overrides);
    let before_value = metric.value(before);
    let after_value = metric.value(after);

    let diff = match (
        before_value.as_ref().and_then(CellValue::as_number),
        after_value.as_ref().and_then(CellValue::as_number),
    ) {
        (Some(b), Some(a)) if !options.is_no_diff() && !b.is_nan() && !a.is_nan() => {
            let pd = percent_diff(a, b);
            let significance = metric.significance(pd, b, a, before, after);
            Some(format_diff(pd, significance, Some(options.diff_precision.unwrap_or(1))))
        }
        _ => None,
    };

    [
        indent(metric.column_name, options.indent_level()),
        format_value(before_value.as_ref(), &options),
        format_value(after_value.as_ref(), &options),
        diff.unwrap_or_default(),
    ]
    .into()
}

/// `[title, before, after, diff]` for an ad hoc accessor.
pub fn comparison_row<F>(
    title: &str,
    before: &BenchmarkDocument,
    after: &BenchmarkDocument,
    get_value: F,
    diff: Option<String>,
    options: &FormatOptions,
) -> Row
where
    F: Fn(&BenchmarkDocument) -> Option<CellValue>,
{
    [
        indent(title, options.indent_level()),
        format_value(get_value(before).as_ref(), options),
        format_value(get_value(after).as_ref(), options),
        diff.unwrap_or_default(),
    ]
    .into()
}

pub fn single_run_row_from_metric(
    metric: &Metric,
    benchmark: &BenchmarkDocument,
    overrides: &FormatOptions,
) -> Row {
    let options = metric.format_options.merged(overrides);
    single_run_row(metric.column_name, benchmark, |doc| metric.value(doc), &options)
}

/// `[title, value]` for an ad hoc accessor.
pub fn single_run_row<F>(
    title: &str,
    benchmark: &BenchmarkDocument,
    get_value: F,
    options: &FormatOptions,
) -> Row
where
    F: Fn(&BenchmarkDocument) -> Option<CellValue>,
{
    vec![
        indent(title, options.indent_level()),
        format_value(get_value(benchmark).as_ref(), options),
    ]
}

/// A section label row with no data cells.
pub fn section(label: &str) -> Row {
    vec![format!("**{label}**")]
}

/// Relative markdown link to a line of the measured source.
pub fn source_link(
    repo: &RepositoryConfig,
    text: &str,
    source_version: &str,
    file_name: &str,
    line: u32,
) -> String {
    let version: String = source_version.chars().filter(|c| *c != '\n').collect();
    format!(
        "[{text}](/{}/{}/blob/{version}/{file_name}#L{line})",
        repo.owner, repo.repo
    )
}

/// Link to a document's worst sample, selected by `pick`.
pub fn worst_identifier_link(
    repo: &RepositoryConfig,
    doc: &BenchmarkDocument,
    pick: fn(&BenchmarkDocument) -> &LanguageServiceSample,
) -> CellValue {
    let worst = pick(doc);
    CellValue::Text(source_link(
        repo,
        &worst.identifier_text,
        &doc.body.source_version,
        &worst.file_name,
        worst.line,
    ))
}

pub fn worst_completion(doc: &BenchmarkDocument) -> &LanguageServiceSample {
    &doc.body.completions.worst
}

pub fn worst_quick_info(doc: &BenchmarkDocument) -> &LanguageServiceSample {
    &doc.body.quick_info.worst
}

/// Rows describing the benchmarking host, via `row(title, accessor, options)`.
pub(crate) fn system_rows<R>(mut row: R) -> Vec<Row>
where
    R: FnMut(&str, &dyn Fn(&BenchmarkDocument) -> Option<CellValue>, &FormatOptions) -> Row,
{
    let none = FormatOptions::NONE;
    vec![
        row("Node version", &|d| Some(d.system.node_version.as_str().into()), &none),
        row("CPU count", &|d| Some(d.system.cpus.len().into()), &FormatOptions::with_precision(0)),
        row(
            "CPU speed",
            &|d| d.system.first_cpu().map(|cpu| format!("{} GHz", cpu.speed / 1000.0).into()),
            &none,
        ),
        row("CPU model", &|d| d.system.first_cpu().map(|cpu| cpu.model.as_str().into()), &none),
        row("CPU Architecture", &|d| Some(d.system.arch.as_str().into()), &none),
        row(
            "Memory",
            &|d| {
                let gib = CellValue::Number(d.system.totalmem / GIB);
                Some(format!("{} GiB", format_value(Some(&gib), &none)).into())
            },
            &none,
        ),
        row("Platform", &|d| Some(d.system.platform.as_str().into()), &none),
        row("Release", &|d| Some(d.system.release.as_str().into()), &none),
    ]
}

const GIB: f64 = 1_073_741_824.0;
