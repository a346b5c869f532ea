use serde::de::DeserializeOwned;

/// Parse a CLI value into one of the snake_case domain enums.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum flag.
pub fn parse_optional_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|raw| parse_enum(raw, field)).transpose()
}

#[cfg(test)]
mod tests {
    use fleet_core::enums::{AssetStatus, MaintenanceKind, Priority, WorkflowKind};

    use super::{parse_enum, parse_optional_enum};

    #[test]
    fn parses_snake_case_enum() {
        let priority: Priority = parse_enum("critical", "priority").expect("priority should parse");
        assert_eq!(priority, Priority::Critical);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: AssetStatus =
            parse_enum("under-maintenance", "status").expect("status should parse");
        assert_eq!(status, AssetStatus::UnderMaintenance);

        let kind: WorkflowKind = parse_enum("Defect-Report", "kind").expect("kind should parse");
        assert_eq!(kind, WorkflowKind::DefectReport);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<MaintenanceKind>("cosmetic", "type").expect_err("should fail");
        assert!(err.to_string().contains("invalid type 'cosmetic'"));
    }

    #[test]
    fn optional_enum_passes_none_through() {
        let parsed: Option<Priority> = parse_optional_enum(None, "priority").expect("none is fine");
        assert_eq!(parsed, None);
    }
}
