use fleet_core::responses::LoginResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck login`.
pub async fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.client()?;
    let token = client.login(&args.email, &args.password).await?;
    tracing::info!(base_url = client.base_url(), "login succeeded");

    output(&LoginResponse { token: Some(token) }, flags.format)
}
