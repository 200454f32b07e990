//! Plain-text rendering for terminals.

use crate::block::{Block, BulletValue};
use crate::inline::Inline;

const LEAF: &str = "🍃";

/// Render blocks as terminal text, one line per block.
#[must_use]
pub fn render_plain(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect::<Vec<_>>().join("\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::SectionHeader { text } => {
            format!("{text}\n{}", "=".repeat(text.chars().count()))
        }
        Block::ItemHeader { text } => format!("> {text}"),
        Block::Bullet { label, value } if value.is_empty() => format!("  - {label}"),
        Block::Bullet { label, value } => {
            let shown = match BulletValue::classify(label, value) {
                BulletValue::Certification { level: Some(level), leaves } => {
                    format!("{level} {}", LEAF.repeat(usize::from(leaves)))
                }
                BulletValue::Certification { level: None, .. } => "none".to_string(),
                BulletValue::Link { href, text } if text == href => href,
                BulletValue::Link { href, text } => format!("{text} <{href}>"),
                BulletValue::Text { text } => text,
            };
            format!("  - {label}: {shown}")
        }
        Block::Text { inlines } => inlines.iter().map(Inline::text).collect(),
        Block::Spacing => String::new(),
    }
}
