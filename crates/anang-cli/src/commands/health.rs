use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `anang health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let health = ctx.api.health().await?;
    tracing::debug!(base_url = %ctx.api.base_url(), status = %health.status, "health checked");
    output(&health, flags.format)
}
