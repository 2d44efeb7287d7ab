//! Benchmark document schema as produced by the package benchmark runner.

use serde::{Deserialize, Serialize};

use super::env::SystemInfo;

/// First document version that records memory usage
pub const MEMORY_USAGE_SINCE_VERSION: u32 = 2;

/// A single language service measurement, used to highlight the slowest
/// identifier of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageServiceSample {
    pub file_name: String,
    pub identifier_text: String,
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Mean duration in milliseconds
    pub mean: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficient_of_variation: Option<f64>,
}

/// Aggregate statistics for one language service operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub mean: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    pub trials: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_coefficient_of_variation: Option<f64>,
    pub worst: LanguageServiceSample,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationCacheSizes {
    pub assignable: f64,
    pub identity: f64,
    pub subtype: f64,
}

/// Measurements for one package at one source version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBenchmarkSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_script_version: Option<String>,

    /// Commit the package source was measured at
    pub source_version: String,

    pub type_count: f64,

    /// Peak memory usage in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_cache_sizes: Option<RelationCacheSizes>,

    pub test_identifier_count: f64,

    pub completions: StatSummary,

    pub quick_info: StatSummary,
}

/// A benchmark document: environment plus measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDocument {
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    pub system: SystemInfo,

    pub body: PackageBenchmarkSummary,
}

/// Whether a document carries a memory usage measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MemoryUsage {
    Supported(f64),
    Unsupported,
}

impl BenchmarkDocument {
    /// Narrow the document to its memory usage variant.
    ///
    /// Older document versions may carry a zeroed `memoryUsage` field, so both
    /// the version and the field itself are checked.
    pub fn memory_usage(&self) -> MemoryUsage {
        match self.body.memory_usage {
            Some(bytes) if self.version >= MEMORY_USAGE_SINCE_VERSION => MemoryUsage::Supported(bytes),
            _ => MemoryUsage::Unsupported,
        }
    }
}

pub fn supports_memory_usage(doc: &BenchmarkDocument) -> bool {
    matches!(doc.memory_usage(), MemoryUsage::Supported(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "version": 2,
        "createdAt": "2020-03-01T00:00:00Z",
        "system": {
            "nodeVersion": "v12.16.1",
            "cpus": [{ "model": "Test CPU", "speed": 2400 }],
            "arch": "x64",
            "platform": "linux",
            "release": "5.4.0",
            "totalmem": 8589934592,
            "hash": "h1"
        },
        "body": {
            "packageName": "react",
            "sourceVersion": "0123abc\n",
            "typeCount": 100,
            "memoryUsage": 52428800,
            "relationCacheSizes": { "assignable": 10, "identity": 2, "subtype": 3 },
            "testIdentifierCount": 40,
            "completions": {
                "mean": 12.5,
                "trials": 5,
                "meanCoefficientOfVariation": 0.05,
                "worst": { "fileName": "react-tests.ts", "identifierText": "useState", "line": 12, "mean": 40.2 }
            },
            "quickInfo": {
                "mean": 3.2,
                "trials": 6,
                "worst": { "fileName": "react-tests.ts", "identifierText": "Component", "line": 3, "mean": 9.1 }
            }
        }
    }"#;

    #[test]
    fn test_deserialize_camel_case_document() {
        let doc: BenchmarkDocument = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(doc.body.package_name.as_deref(), Some("react"));
        assert_eq!(doc.body.completions.worst.identifier_text, "useState");
        assert_eq!(doc.body.quick_info.mean_coefficient_of_variation, None);
        assert_eq!(doc.system.hash(), "h1");
    }

    #[test]
    fn test_supports_memory_usage() {
        let doc: BenchmarkDocument = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(doc.memory_usage(), MemoryUsage::Supported(52_428_800.0));
        assert!(supports_memory_usage(&doc));
    }

    #[test]
    fn test_old_version_does_not_support_memory_usage() {
        let mut doc: BenchmarkDocument = serde_json::from_str(DOCUMENT).unwrap();
        doc.version = 1;
        assert!(!supports_memory_usage(&doc));
    }

    #[test]
    fn test_missing_field_does_not_support_memory_usage() {
        let mut doc: BenchmarkDocument = serde_json::from_str(DOCUMENT).unwrap();
        doc.body.memory_usage = None;
        assert_eq!(doc.memory_usage(), MemoryUsage::Unsupported);
    }
}
