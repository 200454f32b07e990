use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::BusinessesArgs;
use crate::output::output;
use crate::progress::Spinner;

/// Handle `anang businesses`. Never fails on backend errors: the bundled
/// sample data is shown instead.
pub async fn handle(args: &BusinessesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let list = Spinner::around(
        "Loading businesses...",
        ctx.api.get_verified_businesses(args.category.as_deref()),
    )
    .await;
    if list.from_fallback && !flags.quiet {
        eprintln!("backend unavailable, showing sample data");
    }
    output(&list, flags.format)
}
