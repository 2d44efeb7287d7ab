//! Benchmark documents stored as JSON files.

use std::path::Path;

use tracing::debug;

use crate::core::BenchmarkDocument;
use crate::{ReportError, ReportResult};

/// Read a single benchmark document from a JSON file.
///
/// # Errors
/// Returns an error if:
/// - The file doesn't exist or can't be read
/// - The contents aren't a valid benchmark document
pub fn read_document(path: &Path) -> ReportResult<BenchmarkDocument> {
    if !path.exists() {
        return Err(ReportError::Message(format!(
            "file not found: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| ReportError::Message(format!("failed to read {}: {e}", path.display())))?;
    let doc: BenchmarkDocument = serde_json::from_slice(&bytes).map_err(|e| {
        ReportError::Message(format!("failed to parse {}: {e}", path.display()))
    })?;

    debug!(
        path = %path.display(),
        version = doc.version,
        package = doc.body.package_name.as_deref().unwrap_or("unknown"),
        "loaded benchmark document"
    );
    Ok(doc)
}
