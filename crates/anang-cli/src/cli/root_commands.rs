use std::path::PathBuf;

use anang_core::enums::BusinessType;
use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, AuthCommands, ChatCommands, DiscoverCommands, RoadmapCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign up, log in, log out, show the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Browse Kingston discovery categories.
    Discover {
        #[command(subcommand)]
        action: DiscoverCommands,
    },
    /// List verified partner businesses.
    Businesses(BusinessesArgs),
    /// Submit a partner application.
    Apply(ApplyArgs),
    /// Create the login for an accepted application and sign in.
    Finalize(FinalizeArgs),
    /// Licensing roadmap for the signed-in partner.
    Roadmap {
        #[command(subcommand)]
        action: RoadmapCommands,
    },
    /// Ask the assistant, or format a reply.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Review pending partner accounts.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Check that the backend is reachable.
    Health,
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BusinessesArgs {
    /// Only businesses in this category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ApplyArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub business_name: String,
    /// Cafe, Restaurant, Producer, Market, or Other.
    #[arg(long)]
    pub business_type: BusinessType,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub contact: String,
    /// Optional license file (.pdf, .png, .jpg, .jpeg, .webp).
    #[arg(long)]
    pub license: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct FinalizeArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm: String,
    /// Business name shown in the greeting.
    #[arg(long)]
    pub business_name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// session, profile, discovery-entry, business, chat-message, roadmap-step
    pub type_name: String,
}
