//! Core types for perf-report.
//!
//! This module contains the benchmark document schema consumed by the report tables.

pub mod env;
pub mod schema;

// Re-export key types for convenience
pub use env::{CpuInfo, SystemInfo};
pub use schema::{
    BenchmarkDocument, LanguageServiceSample, MEMORY_USAGE_SINCE_VERSION, MemoryUsage,
    PackageBenchmarkSummary, RelationCacheSizes, StatSummary, supports_memory_usage,
};
