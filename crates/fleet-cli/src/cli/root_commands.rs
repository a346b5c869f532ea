use clap::{Args, Subcommand};

use crate::cli::subcommands::{AssetCommands, FleetCommands, MaintenanceCommands, OperatorCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Exchange admin credentials for an API token.
    Login(LoginArgs),
    /// Dashboard counters and derived percentages.
    Dashboard(DashboardArgs),
    /// Fleet-wide views.
    Fleet {
        #[command(subcommand)]
        action: FleetCommands,
    },
    /// Assets (forklifts).
    Assets {
        #[command(subcommand)]
        action: AssetCommands,
    },
    /// Operators.
    Operators {
        #[command(subcommand)]
        action: OperatorCommands,
    },
    /// Maintenance records.
    Maintenance {
        #[command(subcommand)]
        action: MaintenanceCommands,
    },
    /// Print the inspection catalog.
    Catalog,
    /// Run and submit a pre-operation inspection checklist.
    Checklist(ChecklistArgs),
    /// Report a defect on an asset.
    Defect(DefectArgs),
    /// Request maintenance for an asset.
    Request(RequestArgs),
    /// Show recorded submissions, newest first.
    History(HistoryArgs),
}

/// Arguments for `fleetdeck login`.
#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

/// Arguments for `fleetdeck dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Bearer token (defaults to `api.token` from config)
    #[arg(long)]
    pub token: Option<String>,
}

/// Arguments for `fleetdeck checklist`.
#[derive(Clone, Debug, Args)]
pub struct ChecklistArgs {
    /// Asset id to inspect
    #[arg(long)]
    pub asset: String,
    /// Hour meter reading at the start of the shift
    #[arg(long)]
    pub start: String,
    /// Hour meter reading at the end of the shift
    #[arg(long)]
    pub end: String,
    /// Mark an item as checked (repeatable)
    #[arg(long = "check", value_name = "ID")]
    pub checks: Vec<String>,
    /// Mark every catalog item as checked
    #[arg(long, conflicts_with = "checks")]
    pub all: bool,
    /// Attach an observation to an item (repeatable)
    #[arg(long = "observe", value_name = "ID=TEXT", value_parser = parse_observation)]
    pub observations: Vec<(String, String)>,
}

/// Arguments for `fleetdeck defect`.
#[derive(Clone, Debug, Args)]
pub struct DefectArgs {
    #[arg(long)]
    pub asset: String,
    #[arg(long)]
    pub description: String,
    /// low, medium, high, critical
    #[arg(long)]
    pub priority: Option<String>,
}

/// Arguments for `fleetdeck request`.
#[derive(Clone, Debug, Args)]
pub struct RequestArgs {
    #[arg(long)]
    pub asset: String,
    #[arg(long)]
    pub reason: String,
    /// Requested date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// low, medium, high, critical
    #[arg(long)]
    pub priority: Option<String>,
    /// preventive, corrective
    #[arg(long = "type")]
    pub kind: Option<String>,
}

/// Arguments for `fleetdeck history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Only submissions for this asset
    #[arg(long)]
    pub asset: Option<String>,
    /// checklist, defect-report, maintenance-request
    #[arg(long)]
    pub kind: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

fn parse_observation(raw: &str) -> Result<(String, String), String> {
    let (id, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TEXT, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing item id in '{raw}'"));
    }
    Ok((id.to_string(), text.to_string()))
}
