//! # anang-chat
//!
//! Turns assistant replies into display blocks.
//!
//! Replies use a small markdown subset: `**SECTION**` lines, `**Item**`
//! lines, `• Label: value` bullets, inline `**bold**`, and blank lines.
//! [`format_message`] classifies lines into [`Block`]s, [`parse_inline`]
//! tokenizes bold spans, and [`BulletValue::classify`] decides how a bullet
//! value should be shown. Everything here is pure.
//!
//! ```
//! use anang_chat::{Block, format_message};
//!
//! let blocks = format_message("**RESTAURANTS**\n• Hours: 9am: 5pm");
//! assert_eq!(blocks[0], Block::SectionHeader { text: "RESTAURANTS".into() });
//! assert_eq!(
//!     blocks[1],
//!     Block::Bullet { label: "Hours".into(), value: "9am: 5pm".into() }
//! );
//! ```

mod block;
mod format;
mod inline;
mod render;

pub use block::{Block, BulletValue};
pub use format::format_message;
pub use inline::{Inline, parse_inline};
pub use render::render_plain;
