use anang_core::enums::Certification;
use serde::Serialize;

use crate::inline::Inline;

/// One display block of a formatted reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// All-caps group heading, e.g. `RESTAURANTS`.
    SectionHeader { text: String },
    /// Heading for a single listed item.
    ItemHeader { text: String },
    Bullet { label: String, value: String },
    Text { inlines: Vec<Inline> },
    Spacing,
}

impl Block {
    /// Display classification of a bullet's value. `None` for other blocks.
    #[must_use]
    pub fn bullet_value(&self) -> Option<BulletValue> {
        match self {
            Self::Bullet { label, value } => Some(BulletValue::classify(label, value)),
            _ => None,
        }
    }
}

/// How a bullet value is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BulletValue {
    /// Green Plate level drawn as leaves. `leaves` is 0 for no indicator.
    Certification {
        level: Option<Certification>,
        leaves: u8,
    },
    Link { href: String, text: String },
    Text { text: String },
}

const CERTIFICATION_LABEL: &str = "green plate certification";
const LOCATION_LINK_TEXT: &str = "Find Location";

impl BulletValue {
    #[must_use]
    pub fn classify(label: &str, value: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains(CERTIFICATION_LABEL) {
            let level = Certification::parse(value);
            return Self::Certification {
                level,
                leaves: level.map_or(0, Certification::leaves),
            };
        }
        let value = value.trim();
        if is_absolute_url(value) {
            let text = if label.contains("location") {
                LOCATION_LINK_TEXT.to_string()
            } else {
                value.to_string()
            };
            return Self::Link {
                href: value.to_string(),
                text,
            };
        }
        Self::Text {
            text: value.to_string(),
        }
    }
}

fn is_absolute_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|r| !r.is_empty() && !r.contains(char::is_whitespace))
}
