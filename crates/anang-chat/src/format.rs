//! Line classifier for assistant replies.

use crate::block::Block;
use crate::inline::parse_inline;

const BULLET: char = '•';

/// Classify each line of `message` into a display block.
///
/// Lines are trimmed, then matched in priority order: section header, item
/// header, bullet, text. Runs of blank lines collapse into one
/// [`Block::Spacing`].
///
/// A header needs the whole line wrapped in one bold span. A line such as
/// `**Chez Piggy** or **Atomica**` opens and closes with `**` but holds
/// another `**` inside, so it stays text with inline bold.
#[must_use]
pub fn format_message(message: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for line in message.lines().map(str::trim) {
        if line.is_empty() {
            if blocks.last() != Some(&Block::Spacing) {
                blocks.push(Block::Spacing);
            }
            continue;
        }
        blocks.push(classify_line(line));
    }
    blocks
}

fn classify_line(line: &str) -> Block {
    if let Some(inner) = whole_line_bold(line) {
        if is_section_title(inner) {
            return Block::SectionHeader {
                text: inner.trim().to_string(),
            };
        }
        if !inner.contains(BULLET) {
            return Block::ItemHeader {
                text: inner.trim().to_string(),
            };
        }
    }
    if let Some(rest) = line.strip_prefix(BULLET) {
        let (label, value) = rest.split_once(':').unwrap_or((rest, ""));
        return Block::Bullet {
            label: label.trim().to_string(),
            value: value.trim().to_string(),
        };
    }
    Block::Text {
        inlines: parse_inline(line),
    }
}

/// Inner text of a line that is a single `**...**` span.
fn whole_line_bold(line: &str) -> Option<&str> {
    let inner = line.strip_prefix("**")?.strip_suffix("**")?;
    (!inner.trim().is_empty() && !inner.contains("**")).then_some(inner)
}

fn is_section_title(inner: &str) -> bool {
    inner
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_whitespace() || c == '&')
        && inner.chars().any(|c| c.is_ascii_uppercase())
}
