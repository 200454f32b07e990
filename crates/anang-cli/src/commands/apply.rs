use anang_api::LicenseFile;
use anang_portal::PartnerWizard;
use anyhow::Context;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplyArgs;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Serialize)]
struct ApplyResponse {
    submitted: bool,
    email: String,
    business_name: Option<String>,
    next: String,
}

/// Handle `anang apply`: walk the three wizard steps, then submit.
pub async fn handle(args: &ApplyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut wizard = PartnerWizard::new(ctx.api.clone());
    wizard.draft.email.clone_from(&args.email);
    wizard.draft.business_name.clone_from(&args.business_name);
    wizard.next()?;
    wizard.draft.business_type = Some(args.business_type);
    wizard.draft.description.clone_from(&args.description);
    wizard.next()?;
    wizard.draft.contact.clone_from(&args.contact);
    if let Some(path) = &args.license {
        let file = LicenseFile::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        wizard.set_license(Some(file))?;
    }

    let navigation = Spinner::around("Submitting application...", wizard.submit()).await?;
    let state = navigation.state.unwrap_or_default();
    let next = format!(
        "anang finalize --email {} --password <password> --confirm <password>",
        state.email
    );
    output(
        &ApplyResponse {
            submitted: true,
            email: state.email,
            business_name: state.biz_name,
            next,
        },
        flags.format,
    )
}
