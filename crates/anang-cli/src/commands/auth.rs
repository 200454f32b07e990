use anang_core::entities::Session;
use anang_portal::LoginPage;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Serialize)]
struct SessionResponse {
    authenticated: bool,
    email: Option<String>,
    name: Option<String>,
    status: Option<String>,
    storage: &'static str,
    api_base_url: String,
}

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
}

/// Handle `anang auth <subcommand>`.
pub async fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Signup(args) => {
            Spinner::around("Creating account...", ctx.store.signup(&args.email, &args.password))
                .await?;
        }
        AuthCommands::Login(args) => {
            let mut page = LoginPage::new();
            Spinner::around("Signing in...", page.submit(&ctx.store, &args.email, &args.password))
                .await?;
        }
        AuthCommands::Logout => {
            ctx.store.logout()?;
            return output(&LogoutResponse { cleared: true }, flags.format);
        }
        AuthCommands::Status => {}
    }
    output(&session_response(&ctx.store.current(), ctx), flags.format)
}

fn session_response(session: &Session, ctx: &AppContext) -> SessionResponse {
    let user = session.user();
    SessionResponse {
        authenticated: session.is_authenticated(),
        email: user.map(|u| u.email.clone()),
        name: user.map(|u| u.name.clone()),
        status: user.and_then(|u| u.status).map(|s| s.to_string()),
        storage: ctx.store.storage().backend(),
        api_base_url: ctx.config.api.base().to_string(),
    }
}
