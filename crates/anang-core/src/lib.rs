//! # anang-core
//!
//! Core types and error types for the Anang partner portal client.
//!
//! This crate provides the foundational types shared across all Anang crates:
//! - Entity structs for the session, partner profile, discovery listings, and
//!   chat transcript
//! - Status enums (approval status, certification level, step status)
//! - The static licensing roadmap and its progress model
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod roadmap;

/// Smallest valid roadmap progress value (step 1 is done on account creation).
pub const MIN_PROGRESS: u8 = 1;

/// Largest valid roadmap progress value (every step done, business live).
pub const MAX_PROGRESS: u8 = 7;
