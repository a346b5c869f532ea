use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&headers, &rows, options))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

/// One row per element. Object elements get one column per key seen in any
/// element; missing keys render as `-`.
fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::table::TableOptions;
    use super::{render, render_table};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        status: &'static str,
        hours: u32,
        location: Option<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            id: "1",
            status: "available",
            hours: 2450,
            location: None,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "1");
        assert_eq!(parsed["hours"], 2450);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec!["a", "b"];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"["a","b"]"#);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Row {
            id: "1",
            status: "alert",
            hours: 10,
            location: Some("Dock 1"),
        };
        let out = render_table(&value, PLAIN).expect("table render should work");
        let first = out.lines().next().expect("header line");
        assert!(first.contains("key") && first.contains("value"));
        assert!(out.contains("Dock 1"));
    }

    #[test]
    fn table_render_for_array_has_one_row_per_item() {
        let rows = vec![
            Row {
                id: "1",
                status: "available",
                hours: 2450,
                location: None,
            },
            Row {
                id: "2",
                status: "in_use",
                hours: 1820,
                location: Some("Dock 2"),
            },
        ];
        let out = render_table(&rows, PLAIN).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("hours") && lines[0].contains("status"));
        assert!(lines[2].contains("available"));
        assert!(lines[3].contains("Dock 2"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render_table(&rows, PLAIN).expect("render"), "(no rows)");
    }
}
