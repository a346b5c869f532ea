use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use fleet_client::FleetClient;
use fleet_config::FleetConfig;
use fleet_workflow::{AssetDirectory, Directory, InspectionCatalog, JsonlSink, MaintenanceLog, OperatorDirectory};

use super::snapshot::{load_catalog, load_snapshot};

/// Configuration plus lazily loaded resources for command handlers.
pub struct AppContext {
    pub config: FleetConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: FleetConfig) -> Self {
        Self { config }
    }

    pub fn assets(&self) -> anyhow::Result<AssetDirectory> {
        let path = require_path(self.config.data.assets(), "assets")?;
        Ok(Directory::new(load_snapshot(&path)?)?)
    }

    pub fn operators(&self) -> anyhow::Result<OperatorDirectory> {
        let path = require_path(self.config.data.operators(), "operators")?;
        Ok(Directory::new(load_snapshot(&path)?)?)
    }

    pub fn maintenance(&self) -> anyhow::Result<MaintenanceLog> {
        let path = require_path(self.config.data.maintenance(), "maintenance")?;
        Ok(Directory::new(load_snapshot(&path)?)?)
    }

    pub fn catalog(&self) -> anyhow::Result<InspectionCatalog> {
        load_catalog(self.config.data.catalog().as_deref())
    }

    pub fn submission_sink(&self) -> anyhow::Result<JsonlSink> {
        JsonlSink::new(&self.config.general.submissions_path)
            .context("failed to prepare the submission log")
    }

    pub fn client(&self) -> anyhow::Result<FleetClient> {
        let api = &self.config.api;
        FleetClient::new(&api.base_url, Duration::from_secs(api.timeout_secs))
            .context("failed to build HTTP client")
    }

    #[must_use]
    pub fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}

fn require_path(path: Option<PathBuf>, section: &str) -> anyhow::Result<PathBuf> {
    path.with_context(|| {
        format!(
            "no {section} snapshot configured; set data.{section}_path in .fleetdeck/config.toml or FLEETDECK_DATA__{}_PATH",
            section.to_ascii_uppercase()
        )
    })
}
