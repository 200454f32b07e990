use serde::Serialize;

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Plain(String),
    Strong(String),
}

impl Inline {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Strong(text) => text,
        }
    }
}

const MARKER: &str = "**";

/// Split `text` into plain and bold runs at non-overlapping `**...**` spans.
///
/// An unterminated `**` and an empty `****` span stay plain. Adjacent plain
/// runs are merged, and no run is empty.
#[must_use]
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(MARKER) {
        let after = &rest[open + MARKER.len()..];
        let Some(close) = after.find(MARKER) else {
            break;
        };
        if close == 0 {
            plain.push_str(&rest[..open + 2 * MARKER.len()]);
        } else {
            plain.push_str(&rest[..open]);
            if !plain.is_empty() {
                runs.push(Inline::Plain(std::mem::take(&mut plain)));
            }
            runs.push(Inline::Strong(after[..close].to_string()));
        }
        rest = &after[close + MARKER.len()..];
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        runs.push(Inline::Plain(plain));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(s: &str) -> Inline {
        Inline::Plain(s.into())
    }

    fn strong(s: &str) -> Inline {
        Inline::Strong(s.into())
    }

    #[rstest]
    #[case("no markers", vec![plain("no markers")])]
    #[case("a **b** c", vec![plain("a "), strong("b"), plain(" c")])]
    #[case("**b**", vec![strong("b")])]
    #[case("**a** and **b**", vec![strong("a"), plain(" and "), strong("b")])]
    #[case("open **ended", vec![plain("open **ended")])]
    #[case("empty **** span", vec![plain("empty **** span")])]
    #[case("", vec![])]
    fn tokenizes(#[case] input: &str, #[case] expected: Vec<Inline>) {
        assert_eq!(parse_inline(input), expected);
    }

    #[test]
    fn concatenation_drops_only_markers() {
        let input = "Try **Chez Piggy** for brunch, then **Fort Henry**.";
        let joined: String = parse_inline(input).iter().map(Inline::text).collect();
        assert_eq!(joined, input.replace("**", ""));
    }
}
