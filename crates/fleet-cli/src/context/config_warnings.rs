use fleet_config::FleetConfig;

/// Warn about `FLEETDECK_API_*`/`FLEETDECK_DATA_*` keys figment will not map.
pub fn warn_unconfigured(config: &FleetConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FleetConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_single_underscore_key(&env_keys, "FLEETDECK_API") {
        warnings.push(
            "API token appears unset while FLEETDECK_API* env vars exist. Use double underscores (example: FLEETDECK_API__TOKEN)."
                .to_string(),
        );
    }

    if config.data.assets().is_none() && has_single_underscore_key(&env_keys, "FLEETDECK_DATA") {
        warnings.push(
            "Data snapshot paths appear unset while FLEETDECK_DATA* env vars exist. Use double underscores (example: FLEETDECK_DATA__ASSETS_PATH)."
                .to_string(),
        );
    }

    warnings
}

/// `PREFIX_FIELD` instead of `PREFIX__FIELD`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
