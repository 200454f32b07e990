use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(&serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Lists of objects become one row per item; a lone object becomes
/// key/value rows. An object wrapping a single list is unwrapped first.
fn render_table(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => rows_table(items, options),
        Value::Object(map) => {
            if let Some(items) = single_list(map) {
                return rows_table(items, options);
            }
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render(&["key", "value"], &rows, options)
        }
        scalar => table::render(&["value"], &[vec![cell(scalar)]], options),
    }
}

fn single_list(map: &serde_json::Map<String, Value>) -> Option<&Vec<Value>> {
    let mut lists = map.values().filter_map(Value::as_array);
    let first = lists.next()?;
    lists.next().is_none().then_some(first)
}

fn rows_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render(&["value"], &rows, options);
    }

    // Columns in first-seen order across items.
    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|h| map.get(*h).map_or_else(|| String::from("-"), cell))
                .collect()
        })
        .collect::<Vec<Vec<String>>>();
    table::render(&headers, &rows, options)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Step {
        id: u8,
        status: &'static str,
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Step { id: 2, status: "done" }, OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"id":2,"status":"done"}"#);
    }

    #[test]
    fn json_render_is_pretty() {
        let out = render(&Step { id: 2, status: "done" }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["status"], "done");
        assert!(out.contains('\n'));
    }

    #[test]
    fn columns_follow_first_seen_order() {
        let out = render_table(
            &json!([{ "id": 1, "title": "Join" }, { "id": 2, "title": "Consult", "extra": true }]),
            PLAIN,
        );
        let header = out.lines().next().unwrap();
        let id = header.find("id").unwrap();
        let title = header.find("title").unwrap();
        let extra = header.find("extra").unwrap();
        assert!(id < title && title < extra);
        assert!(out.lines().nth(2).unwrap().contains('-'));
    }

    #[test]
    fn wrapper_with_one_list_is_unwrapped() {
        let out = render_table(&json!({ "categories": [{ "id": "food" }] }), PLAIN);
        assert!(out.starts_with("id"));
        assert!(out.contains("food"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        assert_eq!(render_table(&json!([]), PLAIN), "(no rows)");
    }
}
