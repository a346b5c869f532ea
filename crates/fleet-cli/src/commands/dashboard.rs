use anyhow::Context;
use fleet_client::ClientError;
use fleet_core::entities::DashboardMetrics;
use fleet_metrics::DashboardBreakdown;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DashboardResponse {
    metrics: DashboardMetrics,
    /// Integer percentages; zero when the denominator is zero.
    percentages: DashboardBreakdown,
}

/// Handle `fleetdeck dashboard`.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = match args.token.as_deref() {
        Some(token) => token,
        None => ctx
            .config
            .api
            .require_token()
            .context("pass --token or run 'fleetdeck login' and set FLEETDECK_API__TOKEN")?,
    };

    let metrics = match ctx.client()?.fetch_dashboard_metrics(token).await {
        Ok(metrics) => metrics,
        Err(ClientError::Unauthorized) => {
            anyhow::bail!("dashboard: token rejected; log in again with 'fleetdeck login'")
        }
        Err(error) => {
            return Err(anyhow::Error::new(error).context("dashboard: failed to fetch metrics"));
        }
    };

    output(
        &DashboardResponse {
            percentages: DashboardBreakdown::from_metrics(&metrics),
            metrics,
        },
        flags.format,
    )
}
