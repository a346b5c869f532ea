const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table. Numeric cells are right-aligned; status words are
/// colored when `options.color` is set.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, looks_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

/// Wrap an already padded cell in an ANSI color picked from its plain text.
fn colorize(plain: &str, padded: String) -> String {
    let code = match plain.trim().to_ascii_lowercase().as_str() {
        "available" | "active" | "completed" | "complete" | "low" | "true" => "32",
        "in_use" | "scheduled" | "in_progress" | "partial" | "medium" => "33",
        "alert" | "under_maintenance" | "inactive" | "not_started" | "high" | "critical"
        | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "available".into(), "Toyota 8FBE20".into()],
            vec![
                "200".into(),
                "under_maintenance".into(),
                "Hyster H2.5XT with a long note".into(),
            ],
        ]
    }

    #[test]
    fn aligns_mixed_widths() {
        let table = render_table(&["id", "status", "model"], &rows(), PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("   1"));
        assert!(lines[3].starts_with(" 200"));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_table(&["id", "status", "model"], &rows(), options);
        for line in table.lines().skip(2) {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_status_words_only() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["id", "status"], &[vec!["1".into(), "alert".into()]], options);
        assert!(table.contains("\u{1b}[31malert"));
        assert!(!table.contains("\u{1b}[31m1"));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_table(&["id", "status"], &[vec!["1".into()]], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.trim_end().ends_with('-')));
    }

    #[test]
    fn dash_alone_is_not_numeric() {
        assert!(!looks_numeric("-"));
        assert!(looks_numeric("-3.5"));
    }
}
