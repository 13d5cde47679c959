use serde::Serialize;

use super::sort_items;
use crate::notes::ActionItem;

#[derive(Serialize)]
struct Report {
    action_items: Vec<ActionItem>,
    count: usize,
}

/// Render items as pretty-printed JSON, sorted into report order.
///
/// Keys are ordered alphabetically at every level, indentation is two
/// spaces, non-ASCII text is written as-is and the output ends with a newline.
pub fn render_json(items: &[ActionItem]) -> Result<String, serde_json::Error> {
    let action_items = sort_items(items);
    let report = Report {
        count: action_items.len(),
        action_items,
    };

    // Going through `Value` puts every object's keys in sorted order.
    let value = serde_json::to_value(&report)?;
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}
