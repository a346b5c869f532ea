use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fleetdeck` binary.
#[derive(Debug, Parser)]
#[command(name = "fleetdeck", version, about = "fleetdeck - forklift fleet operations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AssetCommands, MaintenanceCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "fleetdeck",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "catalog",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Catalog));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fleetdeck", "catalog", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["fleetdeck", "--format", "xml", "catalog"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn checklist_collects_checks_and_observations() {
        let cli = Cli::try_parse_from([
            "fleetdeck",
            "checklist",
            "--asset",
            "1",
            "--start",
            "2450",
            "--end",
            "2458",
            "--check",
            "2",
            "--check",
            "4",
            "--observe",
            "9=small drip = under mast",
        ])
        .expect("cli should parse");

        let Commands::Checklist(args) = cli.command else {
            panic!("expected checklist command");
        };
        assert_eq!(args.asset, "1");
        assert_eq!(args.checks, vec!["2", "4"]);
        assert_eq!(
            args.observations,
            vec![("9".to_string(), "small drip = under mast".to_string())]
        );
        assert!(!args.all);
    }

    #[test]
    fn checklist_rejects_observation_without_separator() {
        let parsed = Cli::try_parse_from([
            "fleetdeck", "checklist", "--asset", "1", "--start", "1", "--end", "2", "--observe",
            "oops",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn checklist_all_conflicts_with_check() {
        let parsed = Cli::try_parse_from([
            "fleetdeck", "checklist", "--asset", "1", "--start", "1", "--end", "2", "--all",
            "--check", "2",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn request_type_flag_maps_to_kind() {
        let cli = Cli::try_parse_from([
            "fleetdeck",
            "request",
            "--asset",
            "3",
            "--reason",
            "Mast chain noise",
            "--date",
            "2026-11-02",
            "--type",
            "corrective",
        ])
        .expect("cli should parse");
        let Commands::Request(args) = cli.command else {
            panic!("expected request command");
        };
        assert_eq!(args.kind.as_deref(), Some("corrective"));
        assert_eq!(args.priority, None);
    }

    #[test]
    fn assets_list_status_conflicts_with_available() {
        let parsed = Cli::try_parse_from([
            "fleetdeck",
            "assets",
            "list",
            "--status",
            "alert",
            "--available",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["fleetdeck", "assets", "list", "--available"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Assets {
                action: AssetCommands::List {
                    available: true,
                    ..
                }
            }
        ));
    }

    #[test]
    fn maintenance_summary_parses() {
        let cli = Cli::try_parse_from(["fleetdeck", "maintenance", "summary"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Maintenance {
                action: MaintenanceCommands::Summary
            }
        ));
    }
}
