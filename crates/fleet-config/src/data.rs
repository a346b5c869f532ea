//! Locations of the read-only directory snapshots.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Paths to JSON snapshot files. Empty means "not configured".
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DataConfig {
    #[serde(default)]
    pub assets_path: String,

    #[serde(default)]
    pub operators_path: String,

    #[serde(default)]
    pub maintenance_path: String,

    /// Custom inspection catalog. The built-in catalog is used when empty.
    #[serde(default)]
    pub catalog_path: String,
}

impl DataConfig {
    #[must_use]
    pub fn assets(&self) -> Option<PathBuf> {
        non_empty_path(&self.assets_path)
    }

    #[must_use]
    pub fn operators(&self) -> Option<PathBuf> {
        non_empty_path(&self.operators_path)
    }

    #[must_use]
    pub fn maintenance(&self) -> Option<PathBuf> {
        non_empty_path(&self.maintenance_path)
    }

    #[must_use]
    pub fn catalog(&self) -> Option<PathBuf> {
        non_empty_path(&self.catalog_path)
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_paths_are_unset() {
        let config = DataConfig::default();
        assert!(config.assets().is_none());
        assert!(config.catalog().is_none());
    }

    #[test]
    fn whitespace_path_is_unset() {
        let config = DataConfig {
            operators_path: "   ".into(),
            ..Default::default()
        };
        assert!(config.operators().is_none());
    }

    #[test]
    fn set_path_is_returned() {
        let config = DataConfig {
            maintenance_path: "data/maintenance.json".into(),
            ..Default::default()
        };
        assert_eq!(
            config.maintenance(),
            Some(PathBuf::from("data/maintenance.json"))
        );
    }
}
