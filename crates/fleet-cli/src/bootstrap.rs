use anyhow::Context;
use fleet_config::FleetConfig;

use crate::context::find_project_root;

/// Load the layered configuration, exporting the project's `.env` first.
///
/// The project root is the nearest ancestor holding `.fleetdeck/`; without
/// one, dotenvy searches from the working directory.
pub fn load_config() -> anyhow::Result<FleetConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_file = find_project_root(&cwd).map(|root| root.join(".env"));
    FleetConfig::load_with_dotenv(env_file.as_deref())
        .context("failed to load fleetdeck configuration")
}
