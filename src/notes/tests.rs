#[cfg(test)]
mod tests {
    use crate::notes::parser::*;
    use crate::notes::types::*;
    use chrono::NaiveDate;

    // Friday. Relative dates in the golden document resolve against it.
    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()
    }

    fn parse_notes(text: &str) -> Vec<ActionItem> {
        parse(text, reference_date())
    }

    const GOLDEN_INPUT: &str = "\
Kickoff sync — Decisions: use SSO for internal users.

TODO: Update onboarding doc. Owner: Priya. Due: next Friday.

Action: Reach out to vendor about pricing tiers (owner Sam) due 2/20

We should probably fix flaky CI tests soon (P1)

John to draft API rate limit proposal by March 1

Reminder: Send customer follow-up email (no owner yet)

Decision: move launch to Q2.

ACTION ITEM — Migrate staging database; Owner: Mei; Due: 2026-02-28; Priority: P0
";

    struct Expected {
        task: &'static str,
        owner: &'static str,
        due_date: &'static str,
        priority: Priority,
    }

    const GOLDEN_EXPECTED: &[Expected] = &[
        Expected {
            task: "Update onboarding doc",
            owner: "Priya",
            due_date: "2026-02-13",
            priority: Priority::Normal,
        },
        Expected {
            task: "Reach out to vendor about pricing tiers",
            owner: "Sam",
            due_date: "2026-02-20",
            priority: Priority::Normal,
        },
        Expected {
            task: "We should probably fix flaky CI tests soon",
            owner: "unassigned",
            due_date: "",
            priority: Priority::High,
        },
        Expected {
            task: "draft API rate limit proposal",
            owner: "John",
            due_date: "2026-03-01",
            priority: Priority::Normal,
        },
        Expected {
            task: "Send customer follow-up email",
            owner: "unassigned",
            due_date: "",
            priority: Priority::Normal,
        },
        Expected {
            task: "Migrate staging database",
            owner: "Mei",
            due_date: "2026-02-28",
            priority: Priority::Critical,
        },
    ];

    #[test]
    fn test_golden_item_count() {
        assert_eq!(parse_notes(GOLDEN_INPUT).len(), 6);
    }

    #[test]
    fn test_golden_item_fields() {
        let items = parse_notes(GOLDEN_INPUT);
        assert_eq!(items.len(), GOLDEN_EXPECTED.len());

        for (index, (actual, expected)) in items.iter().zip(GOLDEN_EXPECTED).enumerate() {
            assert_eq!(actual.task, expected.task, "task mismatch at index {index}");
            assert_eq!(actual.owner, expected.owner, "owner mismatch at index {index}");
            assert_eq!(
                actual.due_date_iso(),
                expected.due_date,
                "due_date mismatch at index {index}"
            );
            assert_eq!(
                actual.priority, expected.priority,
                "priority mismatch at index {index}"
            );
        }
    }

    #[test]
    fn test_golden_raw_lines_are_populated() {
        for item in parse_notes(GOLDEN_INPUT) {
            assert!(!item.raw_line.is_empty(), "raw_line empty for {:?}", item.task);
        }
    }

    #[test]
    fn test_golden_document_order() {
        let tasks: Vec<String> = parse_notes(GOLDEN_INPUT)
            .into_iter()
            .map(|item| item.task)
            .collect();
        let expected: Vec<&str> = GOLDEN_EXPECTED.iter().map(|e| e.task).collect();
        assert_eq!(tasks, expected);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_notes("").is_empty());
        assert!(parse_notes("   \n  \n\t\n").is_empty());
    }

    #[test]
    fn test_decisions_only_input() {
        let text = "Decisions: use Postgres for storage.\nDecision: target Q2 launch.\n";
        assert!(parse_notes(text).is_empty());
        assert!(parse_notes("Decisions: use SSO for internal users.").is_empty());
    }

    #[test]
    fn test_single_todo_line() {
        let items = parse_notes("TODO: Write integration tests.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "Write integration tests");
        assert_eq!(items[0].owner, UNASSIGNED);
        assert_eq!(items[0].due_date, None);
        assert_eq!(items[0].priority, Priority::Normal);
    }

    #[test]
    fn test_single_action_line() {
        let items = parse_notes("Action: Review pull request (owner Bob) due 2/15");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner, "Bob");
        assert_eq!(items[0].task, "Review pull request");
        assert_eq!(items[0].due_date_iso(), "2026-02-15");
    }

    #[test]
    fn test_name_to_verb_with_by_date() {
        let items = parse_notes("Alice to review the deployment plan by March 10");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner, "Alice");
        assert_eq!(items[0].task, "review the deployment plan");
        assert_eq!(items[0].due_date_iso(), "2026-03-10");
    }

    #[test]
    fn test_priority_labels() {
        let critical = parse_notes("ACTION ITEM -- Fix production outage; Priority: P0");
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].priority, Priority::Critical);
        assert_eq!(critical[0].task, "Fix production outage");

        let normal = parse_notes("ACTION ITEM -- Improve logging; Priority: P2");
        assert_eq!(normal.len(), 1);
        assert_eq!(normal[0].priority, Priority::Normal);
    }

    #[test]
    fn test_explicit_no_owner_is_unassigned() {
        let items = parse_notes("Reminder: Check server logs (no owner yet)");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner, UNASSIGNED);
        assert_eq!(items[0].task, "Check server logs");
    }

    #[test]
    fn test_multiple_items_preserve_document_order() {
        let text = "TODO: First task. Owner: Alpha.\n\
                    TODO: Second task. Owner: Bravo.\n\
                    TODO: Third task. Owner: Charlie.\n";
        let owners: Vec<String> = parse_notes(text).into_iter().map(|i| i.owner).collect();
        assert_eq!(owners, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_equivalent_date_spellings() {
        let a = parse_notes("TODO: Task A. Due: March 1.");
        let b = parse_notes("TODO: Task B. Due: 3/1.");
        assert_eq!(a[0].due_date, b[0].due_date);
        assert_eq!(a[0].due_date_iso(), "2026-03-01");
    }

    #[test]
    fn test_action_item_with_em_dash() {
        let items = parse_notes("ACTION ITEM — Deploy hotfix; Owner: Kim; Due: 2026-03-15");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "Deploy hotfix");
        assert_eq!(items[0].owner, "Kim");
        assert_eq!(items[0].due_date_iso(), "2026-03-15");
    }

    #[test]
    fn test_unparseable_due_date_is_empty() {
        let items = parse_notes("TODO: Plan the offsite. Due: Q3.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "Plan the offsite");
        assert_eq!(items[0].due_date, None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let items = parse_notes("TODO: One.\r\n\r\nTODO: Two.\r\n");
        let tasks: Vec<&str> = items.iter().map(|i| i.task.as_str()).collect();
        assert_eq!(tasks, vec!["One", "Two"]);
    }

    #[test]
    fn test_cr_only_line_endings() {
        let items = parse_notes("TODO: One.\rTODO: Two.\r");
        let tasks: Vec<&str> = items.iter().map(|i| i.task.as_str()).collect();
        assert_eq!(tasks, vec!["One", "Two"]);

        let golden_cr = GOLDEN_INPUT.replace('\n', "\r");
        assert_eq!(parse_notes(&golden_cr), parse_notes(GOLDEN_INPUT));
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        let items = parse_notes("TODO: Résumé review für Zoë. Owner: Zoe.");
        assert_eq!(items[0].task, "Résumé review für Zoë");
        assert_eq!(items[0].owner, "Zoe");
    }
}
