use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && table && !flags.quiet && !no_color,
    };

    let term_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
        }
    }

    #[test]
    fn auto_color_needs_tty_table_and_no_no_color() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(resolve(&table, true, false, None).table_color);
        assert!(!resolve(&table, false, false, None).table_color);
        assert!(!resolve(&table, true, true, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Json, ColorMode::Auto), true, false, None).table_color);
    }

    #[test]
    fn forced_modes_ignore_terminal() {
        assert!(resolve(&flags(OutputFormat::Table, ColorMode::Always), false, true, None).table_color);
        assert!(!resolve(&flags(OutputFormat::Table, ColorMode::Never), true, false, None).table_color);
    }

    #[test]
    fn narrow_or_bogus_columns_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        assert_eq!(resolve(&table, true, false, Some("120")).term_width, Some(120));
        assert_eq!(resolve(&table, true, false, Some("20")).term_width, None);
        assert_eq!(resolve(&table, true, false, Some("wide")).term_width, None);
    }
}
