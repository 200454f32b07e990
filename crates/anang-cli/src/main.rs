#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("anang error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    // Pure local commands run without config or a backend.
    match &cli.command {
        cli::Commands::Schema(args) => return commands::schema::handle(args, &cli.offline_flags()),
        cli::Commands::Chat {
            action: cli::subcommands::ChatCommands::Format,
        } => return commands::chat::format_stdin(&cli.offline_flags()),
        _ => {}
    }

    let config = bootstrap::load_config(cli.api_url.as_deref())?;
    let flags = cli.global_flags(&config);
    ui::init(&flags);

    let ctx = bootstrap::AppContext::init(config)?;
    commands::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ANANG_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
