use anang_api::LicenseFile;
use anang_core::enums::StepStatus;
use anang_core::roadmap::{self, Progress, StepAction};
use anang_portal::{DashboardPage, DashboardView, StepOutcome};
use anyhow::Context;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::RoadmapCommands;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Serialize)]
struct RoadmapResponse {
    view: DashboardView,
    progress: u8,
    verified: bool,
    needs_license: bool,
    steps: Vec<StepRow>,
}

#[derive(Serialize)]
struct StepRow {
    id: u8,
    title: &'static str,
    status: StepStatus,
    action: Option<&'static str>,
}

#[derive(Serialize)]
struct MarkResponse {
    step: u8,
    changed: bool,
    progress: u8,
}

#[derive(Serialize)]
struct OpenResponse {
    step: u8,
    href: &'static str,
}

/// Handle `anang roadmap <subcommand>`.
pub async fn handle(action: &RoadmapCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let RoadmapCommands::Open { step } = action {
        return open_step(*step, flags);
    }

    let mut page = DashboardPage::new(ctx.api.clone());
    Spinner::around("Loading dashboard...", page.load(&ctx.store.current()))
        .await
        .context("log in with `anang auth login` first")?;
    if let Some(error) = page.load_error() {
        tracing::warn!(%error, "showing default roadmap");
    }

    match action {
        RoadmapCommands::Show => output(&roadmap_response(&page), flags.format),
        RoadmapCommands::Done { step } => {
            roadmap::step(*step)?;
            let outcome = Spinner::around("Saving progress...", page.mark_step_done(*step)).await?;
            output(
                &MarkResponse {
                    step: *step,
                    changed: matches!(outcome, StepOutcome::Advanced { .. }),
                    progress: page.progress().value(),
                },
                flags.format,
            )
        }
        RoadmapCommands::Upload { file } => {
            let license = LicenseFile::read(file)
                .await
                .with_context(|| format!("failed to read {}", file.display()))?;
            let receipt = Spinner::around("Uploading license...", page.upload_license(license)).await?;
            output(&receipt, flags.format)
        }
        RoadmapCommands::Open { .. } => Ok(()),
    }
}

fn roadmap_response(page: &DashboardPage) -> RoadmapResponse {
    let progress = page.progress();
    RoadmapResponse {
        view: page.view(),
        progress: progress.value(),
        verified: progress.is_verified(),
        needs_license: page.needs_license(),
        steps: step_rows(progress),
    }
}

fn step_rows(progress: Progress) -> Vec<StepRow> {
    progress
        .steps()
        .into_iter()
        .map(|(step, status)| StepRow {
            id: step.id,
            title: step.title,
            status,
            action: match step.action {
                StepAction::None => None,
                StepAction::Link { label, .. }
                | StepAction::Mailto { label, .. }
                | StepAction::Upload { label } => Some(label),
            },
        })
        .collect()
}

fn open_step(step: u8, flags: &GlobalFlags) -> anyhow::Result<()> {
    let href = roadmap::step(step)?
        .action
        .href()
        .with_context(|| format!("step {step} has no link to open"))?;
    if let Err(error) = open::that(href) {
        tracing::warn!(%error, "could not open browser");
        if !flags.quiet {
            eprintln!("Open this link: {href}");
        }
    }
    output(&OpenResponse { step, href }, flags.format)
}
