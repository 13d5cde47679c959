use chrono::NaiveDate;
use tracing::{debug, trace};

use super::classifier::LineClassifier;
use super::cleaner::clean_task_text;
use super::dates::DateNormalizer;
use super::metadata::{MetadataExtractor, OwnerHint};
use super::types::{ActionItem, UNASSIGNED};

/// Line boundaries: `\n`, a lone `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. A `\r\n` pair leaves an empty piece, which `parse_line` skips.
fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Extracts action items from meeting-note documents
#[derive(Debug)]
pub struct NotesParser {
    classifier: LineClassifier,
    extractor: MetadataExtractor,
}

impl NotesParser {
    /// Create a parser that resolves relative dates against `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_classifier(today, LineClassifier::default())
    }

    /// Create a parser with a custom classifier.
    pub fn with_classifier(today: NaiveDate, classifier: LineClassifier) -> Self {
        Self {
            classifier,
            extractor: MetadataExtractor::new(DateNormalizer::new(today)),
        }
    }

    /// Parse a whole document. Items come back in document order.
    pub fn parse(&self, text: &str) -> Vec<ActionItem> {
        let items: Vec<ActionItem> = text
            .split(is_line_terminator)
            .enumerate()
            .filter_map(|(index, line)| {
                let item = self.parse_line(line);
                if let Some(item) = &item {
                    trace!("Line {}: extracted '{}'", index + 1, item.task);
                }
                item
            })
            .collect();

        debug!("Extracted {} action items", items.len());
        items
    }

    /// Parse a single line, returning `None` when it is not an action item.
    pub fn parse_line(&self, line: &str) -> Option<ActionItem> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let classification = self.classifier.classify(line)?;
        trace!("Matched '{}' on: {}", classification.matcher, line);

        // Metadata comes from the whole line, not just the classified task text.
        let metadata = self.extractor.extract(line);
        let owner = match metadata.owner {
            OwnerHint::Named(name) => name,
            // "(no owner" only confirms the default; a name-to-verb owner still stands.
            OwnerHint::ExplicitlyUnassigned | OwnerHint::Unspecified => classification
                .owner
                .unwrap_or_else(|| UNASSIGNED.to_string()),
        };

        let task = clean_task_text(&classification.task_text);
        if task.is_empty() {
            debug!("Dropping action item with no task text: {}", line);
            return None;
        }

        Some(
            ActionItem::new(task)
                .with_owner(owner)
                .with_due_date(metadata.due_date)
                .with_priority(metadata.priority)
                .with_raw_line(line),
        )
    }
}

/// Parse `text` with the default classifier, resolving relative dates against `today`.
pub fn parse(text: &str, today: NaiveDate) -> Vec<ActionItem> {
    NotesParser::new(today).parse(text)
}
