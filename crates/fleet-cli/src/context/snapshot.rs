use std::path::Path;

use anyhow::Context;
use fleet_core::entities::InspectionItem;
use fleet_workflow::InspectionCatalog;
use serde::de::DeserializeOwned;

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Read a JSON array snapshot.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid snapshot {}", path.display()))
}

/// Catalog from `path`, or the built-in ten-item catalog.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<InspectionCatalog> {
    let items: Vec<InspectionItem> = match path {
        Some(path) => load_snapshot(path)?,
        None => serde_json::from_str(BUILTIN_CATALOG).context("built-in catalog is invalid")?,
    };
    InspectionCatalog::new(items).map_err(anyhow::Error::from)
}
