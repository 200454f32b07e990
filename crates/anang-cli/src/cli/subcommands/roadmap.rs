use std::path::PathBuf;

use clap::Subcommand;

/// Licensing roadmap commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoadmapCommands {
    /// Show every step with its status.
    Show,
    /// Mark a step (2-6) as done.
    Done { step: u8 },
    /// Upload the city license for GO LIVE.
    Upload { file: PathBuf },
    /// Open a step's link in the browser.
    Open { step: u8 },
}
