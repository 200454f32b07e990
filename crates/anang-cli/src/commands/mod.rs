pub mod admin;
pub mod apply;
pub mod auth;
pub mod businesses;
pub mod chat;
pub mod discover;
pub mod finalize;
pub mod health;
pub mod roadmap;
pub mod schema;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, ctx, flags).await,
        Commands::Discover { action } => discover::handle(&action, ctx, flags).await,
        Commands::Businesses(args) => businesses::handle(&args, ctx, flags).await,
        Commands::Apply(args) => apply::handle(&args, ctx, flags).await,
        Commands::Finalize(args) => finalize::handle(&args, ctx, flags).await,
        Commands::Roadmap { action } => roadmap::handle(&action, ctx, flags).await,
        Commands::Chat { action } => chat::handle(&action, ctx, flags).await,
        Commands::Admin { action } => admin::handle(&action, ctx, flags).await,
        Commands::Health => health::handle(ctx, flags).await,
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
