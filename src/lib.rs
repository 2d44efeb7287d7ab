pub mod compare_cmd;
pub mod config;
pub mod core;
pub mod metrics;
pub mod report;
pub mod single_cmd;
pub mod storage;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

pub use crate::config::{ReportConfig, RepositoryConfig};
pub use crate::core::{BenchmarkDocument, SystemInfo};
pub use crate::report::{create_comparison_table, create_single_run_table};

/// Print the markdown, or write it to `output` when given.
pub fn emit_report(markdown: &str, output: Option<&Path>) -> ReportResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        ReportError::Message(format!("failed to create directory: {e}"))
                    })?;
                }
            }
            std::fs::write(path, format!("{markdown}\n")).map_err(|e| {
                ReportError::Message(format!("failed to write {}: {e}", path.display()))
            })?;
            eprintln!("Wrote report to {}", path.display());
        }
        None => println!("{markdown}"),
    }
    Ok(())
}
