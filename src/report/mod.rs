//! Report rendering
//!
//! Orders action items deterministically and renders them as a Markdown
//! checklist or a JSON document. Both renderers sort internally, so callers
//! can hand over items in document order.

pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::render_markdown;

use crate::notes::ActionItem;

/// Return the items in report order.
///
/// Assigned owners come before unassigned items, owners sort
/// case-insensitively, and within one owner dated items come first in
/// ascending date order. The sort is stable: items with equal keys keep
/// their input order.
pub fn sort_items(items: &[ActionItem]) -> Vec<ActionItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_cached_key(|item| {
        (
            !item.is_assigned(),
            item.owner.to_lowercase(),
            item.due_date.is_none(),
            item.due_date,
        )
    });
    sorted
}
