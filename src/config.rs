use std::path::Path;

use serde::Deserialize;

use crate::{ReportError, ReportResult};

pub const DEFAULT_OWNER: &str = "microsoft";
pub const DEFAULT_REPO: &str = "DefinitelyTyped";

/// Repository that worst-identifier source links point into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub owner: String,
    pub repo: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub github: RepositoryConfig,
}

pub fn load_report_config(path: &Path) -> ReportResult<ReportConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| ReportError::Message(format!("failed to read {}: {e}", path.display())))?;
    let cfg: ReportConfig = toml::from_str(&s)
        .map_err(|e| ReportError::Message(format!("failed to parse {}: {e}", path.display())))?;
    Ok(cfg)
}

/// Load the config file if one was given, otherwise use the defaults.
pub fn resolve_report_config(path: Option<&Path>) -> ReportResult<ReportConfig> {
    match path {
        Some(p) => load_report_config(p),
        None => Ok(ReportConfig::default()),
    }
}
