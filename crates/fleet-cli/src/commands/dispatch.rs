use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => commands::login::handle(&args, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Fleet { action } => commands::fleet::handle(&action, ctx, flags),
        Commands::Assets { action } => commands::assets::handle(&action, ctx, flags),
        Commands::Operators { action } => commands::operators::handle(&action, ctx, flags),
        Commands::Maintenance { action } => commands::maintenance::handle(&action, ctx, flags),
        Commands::Catalog => commands::catalog::handle(ctx, flags),
        Commands::Checklist(args) => commands::checklist::handle(&args, ctx, flags),
        Commands::Defect(args) => commands::defect::handle(&args, ctx, flags),
        Commands::Request(args) => commands::request::handle(&args, ctx, flags),
        Commands::History(args) => commands::history::handle(&args, ctx, flags),
    }
}
