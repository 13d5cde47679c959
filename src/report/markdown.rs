use std::fmt::Write;

use super::sort_items;
use crate::notes::{ActionItem, Priority, UNASSIGNED};

const HEADING: &str = "# Action Items";
const EMPTY_PLACEHOLDER: &str = "_No action items found._";

/// Render items as a Markdown checklist, sorted into report order.
pub fn render_markdown(items: &[ActionItem]) -> String {
    let mut out = String::new();
    out.push_str(HEADING);
    out.push_str("\n\n");

    if items.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    for item in sort_items(items) {
        out.push_str(&checklist_line(&item));
        out.push('\n');
    }
    out
}

fn checklist_line(item: &ActionItem) -> String {
    let mut line = format!("- [ ] {}", item.task);
    // Writing into a String cannot fail.
    // Exact match only; sorting treats the sentinel case-insensitively.
    if !item.owner.is_empty() && item.owner != UNASSIGNED {
        let _ = write!(line, " @{}", item.owner);
    }
    if let Some(due) = item.due_date {
        let _ = write!(line, " (due {})", due.format("%Y-%m-%d"));
    }
    if item.priority != Priority::Normal {
        let _ = write!(line, " [{}]", item.priority);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn checkbox_lines(markdown: &str) -> Vec<&str> {
        markdown.lines().filter(|l| l.starts_with("- [ ]")).collect()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            render_markdown(&[]),
            "# Action Items\n\n_No action items found._\n"
        );
    }

    #[test]
    fn test_full_line_format() {
        let items = [ActionItem::new("Draft the Q1 budget proposal")
            .with_owner("Alice")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 14))
            .with_priority(Priority::High)];
        assert_eq!(
            render_markdown(&items),
            "# Action Items\n\n- [ ] Draft the Q1 budget proposal @Alice (due 2026-02-14) [high]\n"
        );
    }

    #[test]
    fn test_normal_priority_and_unassigned_are_omitted() {
        let output = render_markdown(&[ActionItem::new("Orphan task")]);
        assert!(output.contains("- [ ] Orphan task\n"));
        assert!(!output.contains("@unassigned"));
        assert!(!output.contains("[normal]"));
        assert!(!output.contains("(due"));
    }

    #[test]
    fn test_owner_tag_omitted_only_for_exact_sentinel() {
        let output = render_markdown(&[ActionItem::new("Ship it").with_owner("Unassigned")]);
        assert!(output.contains("- [ ] Ship it @Unassigned\n"));

        let output = render_markdown(&[ActionItem::new("Ship it").with_owner("")]);
        assert!(output.contains("- [ ] Ship it\n"));
    }

    #[test]
    fn test_critical_priority_tag() {
        let output = render_markdown(&[ActionItem::new("Outage").with_priority(Priority::Critical)]);
        assert!(output.contains("- [ ] Outage [critical]"));
    }

    #[test]
    fn test_items_are_sorted_in_output() {
        let items = [
            ActionItem::new("Zulu task").with_owner("Zara"),
            ActionItem::new("Alpha task").with_owner("Alice"),
            ActionItem::new("Nobody's task"),
        ];
        let output = render_markdown(&items);
        let lines = checkbox_lines(&output);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Alpha task"));
        assert!(lines[1].contains("Zulu task"));
        assert!(lines[2].contains("Nobody's task"));
    }

    #[test]
    fn test_exactly_one_trailing_newline() {
        let output = render_markdown(&[ActionItem::new("X")]);
        assert!(output.starts_with("# Action Items\n\n"));
        assert!(output.ends_with("- [ ] X\n"));
        assert!(!output.ends_with("\n\n"));
    }
}
