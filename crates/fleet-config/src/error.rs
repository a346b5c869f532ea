use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `FLEETDECK_*` variable could not be read into `FleetConfig`.
    #[error("failed to load fleetdeck config: {0}")]
    Figment(#[from] figment::Error),

    /// A value needed by the current command is unset.
    #[error("'{section}' is not set; add it to .fleetdeck/config.toml or the environment")]
    NotConfigured { section: String },

    #[error("failed to read {}: {source}", path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("bad value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
