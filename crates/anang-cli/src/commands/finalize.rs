use anang_portal::{NavState, SuccessPage};
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::FinalizeArgs;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Serialize)]
struct FinalizeResponse {
    greeting: String,
    email: String,
    authenticated: bool,
    route: &'static str,
}

/// Handle `anang finalize`: create the login and sign in.
pub async fn handle(args: &FinalizeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = NavState {
        email: args.email.clone(),
        biz_name: args.business_name.clone(),
    };
    let Ok(mut page) = SuccessPage::open(ctx.api.clone(), Some(state)) else {
        anyhow::bail!("an application email is required; run `anang apply` first");
    };
    let navigation = Spinner::around(
        "Creating your login...",
        page.finalize(&ctx.store, &args.password, &args.confirm),
    )
    .await?;
    output(
        &FinalizeResponse {
            greeting: page.greeting(),
            email: page.email().to_string(),
            authenticated: ctx.store.current().is_authenticated(),
            route: navigation.route.path(),
        },
        flags.format,
    )
}
