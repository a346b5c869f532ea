//! # fleet-config
//!
//! fleetdeck settings, merged by figment from four layers. Later layers win:
//!
//! 1. built-in defaults
//! 2. `~/.config/fleetdeck/config.toml`
//! 3. `.fleetdeck/config.toml` under the working directory
//! 4. `FLEETDECK_*` variables, where `__` descends into a section
//!    (`FLEETDECK_API__TOKEN` sets `api.token`)
//!
//! ```no_run
//! use fleet_config::FleetConfig;
//!
//! let config = FleetConfig::load_with_dotenv(None).expect("config");
//! if let Some(assets) = config.data.assets() {
//!     println!("assets snapshot: {}", assets.display());
//! }
//! ```

mod api;
mod data;
mod error;
mod general;

pub use api::ApiConfig;
pub use data::DataConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config directory.
pub const PROJECT_DIR: &str = ".fleetdeck";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FleetConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FleetConfig {
    /// Merge every layer and validate the API section.
    ///
    /// # Errors
    ///
    /// `ConfigError::Figment` when a layer does not parse, or
    /// `ConfigError::InvalidValue` when the API section is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Export variables from a `.env` file, then [`Self::load`].
    ///
    /// With `env_file` set and present on disk, that file is read and a
    /// malformed file is an error. Otherwise dotenvy looks for `.env` in the
    /// working directory and its parents, and a missing file is ignored.
    /// Variables already in the environment are never overwritten.
    ///
    /// # Errors
    ///
    /// `ConfigError::Dotenv` for an unreadable `env_file`, otherwise as
    /// [`Self::load`].
    pub fn load_with_dotenv(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        match env_file.filter(|path| path.exists()) {
            Some(path) => {
                dotenvy::from_path(path).map_err(|source| ConfigError::Dotenv {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        Self::load()
    }

    /// The provider chain behind [`Self::load`], exposed for tests.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(user_config));
            }
        }

        let project_config = PathBuf::from(PROJECT_DIR).join("config.toml");
        if project_config.exists() {
            figment = figment.merge(Toml::file(project_config));
        }

        figment.merge(Env::prefixed("FLEETDECK_").split("__"))
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fleetdeck").join("config.toml"))
    }
}
