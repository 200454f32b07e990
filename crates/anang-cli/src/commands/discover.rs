use anang_portal::DiscoveryPage;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::DiscoverCommands;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Serialize)]
struct EntryRow<'a> {
    name: &'a str,
    location: Option<&'a str>,
    description: Option<&'a str>,
    leaves: u8,
    url: Option<&'a str>,
}

/// Handle `anang discover <subcommand>`.
pub async fn handle(
    action: &DiscoverCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut page = DiscoveryPage::new(ctx.api.clone());
    match action {
        DiscoverCommands::Categories => {
            Spinner::around("Loading categories...", page.load_categories()).await;
            if let Some(error) = page.categories_error() {
                anyhow::bail!("{error}");
            }
            output(&page.categories(), flags.format)
        }
        DiscoverCommands::Entries { category } => {
            Spinner::around("Loading entries...", page.show_category(category)).await;
            if let Some(error) = page.entries_error() {
                anyhow::bail!("{error}");
            }
            let rows = page
                .entries()
                .iter()
                .map(|e| EntryRow {
                    name: &e.name,
                    location: e.location.as_deref(),
                    description: e.description(),
                    leaves: e.certification_leaves(),
                    url: e.url.as_deref(),
                })
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
    }
}
