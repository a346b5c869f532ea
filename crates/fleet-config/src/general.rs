//! CLI-wide settings that are not tied to the backend or the snapshots.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_submissions_path() -> String {
    ".fleetdeck/submissions.jsonl".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// JSONL file that receives accepted submissions.
    #[serde(default = "default_submissions_path")]
    pub submissions_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            submissions_path: default_submissions_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_to_twenty() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.submissions_path, ".fleetdeck/submissions.jsonl");
    }
}
