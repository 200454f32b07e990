use clap::Subcommand;

/// Assistant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Ask a question and print the formatted answer.
    Ask { question: String },
    /// Format an assistant reply read from stdin.
    Format,
}
