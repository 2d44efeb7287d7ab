//! System information recorded alongside each benchmark document.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A single logical CPU as reported by the benchmarking host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub model: String,
    /// Clock speed in MHz
    pub speed: f64,
}

/// Environment the benchmark ran in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub node_version: String,

    #[serde(default)]
    pub cpus: Vec<CpuInfo>,

    pub arch: String,

    pub platform: String,

    pub release: String,

    /// Total memory in bytes
    pub totalmem: f64,

    /// Fingerprint of the fields above; derived when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Fields that participate in the derived hash, in a fixed order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HashInput<'a> {
    node_version: &'a str,
    cpus: &'a [CpuInfo],
    arch: &'a str,
    platform: &'a str,
    release: &'a str,
    totalmem: f64,
}

impl SystemInfo {
    /// Stored hash if the document carries one, otherwise a SHA-256 digest of
    /// the environment fields.
    pub fn hash(&self) -> Cow<'_, str> {
        match self.hash.as_deref() {
            Some(h) if !h.is_empty() => Cow::Borrowed(h),
            _ => Cow::Owned(self.compute_hash()),
        }
    }

    /// Digest of the environment fields, ignoring any stored hash.
    pub fn compute_hash(&self) -> String {
        let input = HashInput {
            node_version: &self.node_version,
            cpus: &self.cpus,
            arch: &self.arch,
            platform: &self.platform,
            release: &self.release,
            totalmem: self.totalmem,
        };
        // Serializing plain strings and numbers cannot fail
        let bytes = serde_json::to_vec(&input).unwrap_or_default();
        sha256::digest(bytes.as_slice())
    }

    /// True when both documents ran on an identical environment.
    pub fn same_environment(&self, other: &SystemInfo) -> bool {
        self.hash() == other.hash()
    }

    pub fn first_cpu(&self) -> Option<&CpuInfo> {
        self.cpus.first()
    }
}
