//! # anang-auth
//!
//! Session management for the Anang portal.
//!
//! [`SessionStore`] owns the current session (`Anonymous` or
//! `Authenticated`), hydrates it from durable storage on construction, and
//! notifies subscribers through a `tokio::sync::watch` channel. Storage is a
//! [`SessionStorage`] trait with file, OS keychain (`keyring`), and in-memory
//! backends.

pub mod error;
pub mod records;
pub mod storage;
pub mod store;

pub use error::AuthError;
pub use records::{AUTH_KEY, USER_KEY};
pub use storage::{FileStorage, KeyringStorage, MemoryStorage, SessionStorage};
pub use store::SessionStore;
