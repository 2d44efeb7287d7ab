//! Compare two benchmark documents and render the markdown table posted to a PR.

use std::path::PathBuf;

use tracing::info;

use crate::config::resolve_report_config;
use crate::report::create_comparison_table;
use crate::storage::read_document;
use crate::{ReportResult, emit_report};

/// Default column title for the baseline document
pub const DEFAULT_BEFORE_TITLE: &str = "before";
/// Default column title for the document under test
pub const DEFAULT_AFTER_TITLE: &str = "after";

/// Configuration for the compare command
pub struct CompareConfig {
    pub before: PathBuf,
    pub after: PathBuf,
    pub before_title: Option<String>,
    pub after_title: Option<String>,
    pub config: Option<PathBuf>,
}

/// Load both documents and render the comparison table.
pub fn compare(config: &CompareConfig) -> ReportResult<String> {
    let repo = resolve_report_config(config.config.as_deref())?.github;
    let before = read_document(&config.before)?;
    let after = read_document(&config.after)?;

    let before_title = config.before_title.as_deref().unwrap_or(DEFAULT_BEFORE_TITLE);
    let after_title = config.after_title.as_deref().unwrap_or(DEFAULT_AFTER_TITLE);

    info!(before = %config.before.display(), after = %config.after.display(), "rendering comparison table");
    Ok(create_comparison_table(&before, &after, before_title, after_title, &repo))
}

/// Main entry point for the compare command
pub fn run(
    before: PathBuf,
    after: PathBuf,
    before_title: Option<String>,
    after_title: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> ReportResult<String> {
    let compare_config = CompareConfig { before, after, before_title, after_title, config };
    let markdown = compare(&compare_config)?;
    emit_report(&markdown, output.as_deref())?;
    Ok(markdown)
}
