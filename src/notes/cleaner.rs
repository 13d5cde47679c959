//! Task text cleanup
//!
//! Strips inline metadata annotations (owner, due date, priority, "no
//! owner" markers) out of a raw task phrase so only the task itself is left.

use regex::Regex;
use std::sync::LazyLock;

/// Removal patterns, applied in order.
static METADATA_FRAGMENTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "Owner: Name", with optional surrounding semicolons
        r"\s*;?\s*Owner:\s*[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\s*;?",
        // "(owner Name)"
        r"(?i)\s*\(owner\s+\w+\)",
        // "Due: ..." / "due ..." up to punctuation
        r"\s*;?\s*[Dd]ue:?\s+[^;.\n]+",
        // "by <date>" only when a date shape follows, so "by the team" survives
        concat!(
            r"(?i)\s+by\s+(?:next\s+\w+",
            r"|[0-9]{1,2}/[0-9]{1,2}(?:/[0-9]{2,4})?",
            r"|[0-9]{4}-[0-9]{2}-[0-9]{2}",
            r"|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\w*\s+[0-9]{1,2}(?:\s*,?\s*[0-9]{4})?)",
        ),
        // "Priority: P0"
        r"(?i)\s*;?\s*Priority:\s*P[012]\s*;?",
        // "(P1)"
        r"(?i)\s*\(P[012]\)",
        // "(no owner)", "(no owner yet)"
        r"(?i)\s*\(no\s+owner[^)]*\)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
    .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Remove metadata fragments from `raw` and tidy what is left.
///
/// Whitespace runs collapse to one space; leading whitespace and trailing
/// whitespace, periods and semicolons are trimmed. An empty result means
/// the line carried no task of its own.
pub fn clean_task_text(raw: &str) -> String {
    let stripped = METADATA_FRAGMENTS
        .iter()
        .fold(raw.to_string(), |text, pattern| {
            pattern.replace_all(&text, "").into_owned()
        });

    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed
        .trim_start()
        .trim_end_matches(|c: char| c == '.' || c == ';' || c.is_whitespace())
        .to_string()
}
