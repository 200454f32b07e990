use clap::Subcommand;

/// Account review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List accounts awaiting review.
    Pending,
    /// Approve an account.
    Approve { email: String },
    /// Reject an account.
    Reject { email: String },
}
