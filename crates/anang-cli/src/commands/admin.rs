use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::output::output;

/// Handle `anang admin <subcommand>`.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::Pending => output(&ctx.api.get_pending_users().await?, flags.format),
        AdminCommands::Approve { email } => {
            output(&ctx.api.admin_approve(email).await?, flags.format)
        }
        AdminCommands::Reject { email } => output(&ctx.api.admin_reject(email).await?, flags.format),
    }
}
