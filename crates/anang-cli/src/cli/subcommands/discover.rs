use clap::Subcommand;

/// Discovery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DiscoverCommands {
    /// List categories.
    Categories,
    /// List entries of a category.
    Entries { category: String },
}
