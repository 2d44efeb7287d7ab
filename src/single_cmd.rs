use std::path::PathBuf;

use tracing::info;

use crate::{ReportResult, emit_report};
use crate::config::resolve_report_config;
use crate::report::create_single_run_table;
use crate::storage::read_document;

/// Render the table for a single benchmark document.
pub fn run(benchmark: PathBuf, config: Option<PathBuf>, output: Option<PathBuf>) -> ReportResult<String> {
    let repo = resolve_report_config(config.as_deref())?.github;
    let doc = read_document(&benchmark)?;

    info!(benchmark = %benchmark.display(), "rendering single-run table");
    let markdown = create_single_run_table(&doc, &repo);
    emit_report(&markdown, output.as_deref())?;
    Ok(markdown)
}
