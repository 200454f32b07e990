#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render an aligned text table with a dashed rule under the header.
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();
    if let Some(max) = options.max_width {
        shrink(&mut widths, max);
    }

    let mut out = vec![format_line(
        headers.iter().copied().zip(widths.iter().copied()),
        false,
    )];
    let rule = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    out.push("-".repeat(rule));
    for row in rows {
        out.push(format_line(
            widths
                .iter()
                .enumerate()
                .map(|(i, w)| (row.get(i).map_or("-", String::as_str), *w)),
            options.color,
        ));
    }
    out.join("\n")
}

fn format_line<'a>(cells: impl Iterator<Item = (&'a str, usize)>, color: bool) -> String {
    cells
        .map(|(text, width)| {
            let text = truncate(text, width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            if color {
                format!("{}{pad}", paint(&text))
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Take one column from the widest until the table fits.
fn shrink(widths: &mut [usize], max: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > max {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn paint(text: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "done" | "approved" | "ok" | "true" => "32",
        "available" | "pending_review" | "pending" => "33",
        "locked" | "rejected" | "false" => "31",
        _ => return text.to_string(),
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
