use anang_config::AnangConfig;
use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `anang` binary.
#[derive(Debug, Parser)]
#[command(name = "anang", version, about = "Anang - Kingston partner portal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL, overriding api.base_url
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    pub fn global_flags(&self, config: &AnangConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&config.general.default_format)),
            quiet: self.quiet,
        }
    }

    /// Flags for commands that run before config is loaded.
    pub fn offline_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(OutputFormat::Json),
            quiet: self.quiet,
        }
    }
}
