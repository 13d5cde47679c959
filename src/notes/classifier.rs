//! Line classification
//!
//! Decides whether a line of meeting notes is an action item. Each way a
//! line can qualify is a [`LineMatcher`]; the [`LineClassifier`] tries them
//! in a fixed priority order and the first match wins. Lines carrying a
//! `Decision:`/`Decisions:` marker are rejected before any matcher runs.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

/// Verbs accepted by the "`<Name> to <verb> ...`" form.
pub const TASK_VERBS: &[&str] = &[
    "draft",
    "send",
    "create",
    "write",
    "fix",
    "update",
    "review",
    "prepare",
    "build",
    "design",
    "implement",
    "schedule",
    "reach",
    "migrate",
    r"set\s+up",
    "check",
    "follow",
    "complete",
    "submit",
    "finalize",
    "organize",
    "coordinate",
    "investigate",
    "test",
    "deploy",
    "audit",
    "document",
    "analyze",
    "configure",
    "remove",
    "add",
    "refactor",
    "propose",
    "plan",
    "outline",
    "establish",
];

static DECISION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\W)Decisions?:\s*").expect("valid regex"));

static NAME_TO_VERB: LazyLock<Regex> = LazyLock::new(|| {
    let verbs = TASK_VERBS.join("|");
    Regex::new(&format!(r"^([A-Z][a-z]+)\s+(?i:to\s+({verbs}))\b(.+)?")).expect("valid regex")
});

static PRIORITY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(P[012]\)").expect("valid regex"));

/// Result of a successful classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Name of the matcher that accepted the line
    pub matcher: &'static str,
    /// Task phrase before metadata cleanup
    pub task_text: String,
    /// Owner implied by the matched form itself, if any
    pub owner: Option<String>,
}

/// One way of recognizing an action-item line.
pub trait LineMatcher: Send + Sync + fmt::Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Attempt to classify a trimmed, non-empty line.
    fn classify(&self, line: &str) -> Option<Classification>;
}

/// Matches a marker at the start of the line and takes the rest as the task.
#[derive(Debug)]
pub struct PrefixMatcher {
    name: &'static str,
    pattern: Regex,
}

impl PrefixMatcher {
    /// `pattern` must be anchored and capture the task text in group 1.
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid regex"),
        }
    }

    pub fn todo() -> Self {
        Self::new("todo", r"(?i)^TODO:\s*(.+)")
    }

    pub fn action() -> Self {
        Self::new("action", r"(?i)^Action:\s*(.+)")
    }

    /// `ACTION ITEM` followed by `--`, an em-dash, a colon or a hyphen.
    pub fn action_item() -> Self {
        Self::new("action_item", r"(?i)^ACTION\s+ITEM\s*(?:--|[—:\-])\s*(.+)")
    }

    pub fn reminder() -> Self {
        Self::new("reminder", r"(?i)^Reminder:\s*(.+)")
    }
}

impl LineMatcher for PrefixMatcher {
    fn name(&self) -> &'static str {
        self.name
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        let caps = self.pattern.captures(line)?;
        Some(Classification {
            matcher: self.name,
            task_text: caps[1].to_string(),
            owner: None,
        })
    }
}

/// "`Alice to review the plan`": the capitalized name becomes the owner and
/// the task starts at the verb.
#[derive(Debug, Default)]
pub struct NameToVerbMatcher;

impl LineMatcher for NameToVerbMatcher {
    fn name(&self) -> &'static str {
        "name_to_verb"
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        let caps = NAME_TO_VERB.captures(line)?;
        let rest = caps.get(3).map_or("", |m| m.as_str());
        Some(Classification {
            matcher: self.name(),
            task_text: format!("{}{}", &caps[2], rest).trim().to_string(),
            owner: Some(caps[1].to_string()),
        })
    }
}

/// Any line carrying a `(P0)`, `(P1)` or `(P2)` tag; the whole line is the task.
#[derive(Debug, Default)]
pub struct PriorityTagMatcher;

impl LineMatcher for PriorityTagMatcher {
    fn name(&self) -> &'static str {
        "priority_tag"
    }

    fn classify(&self, line: &str) -> Option<Classification> {
        PRIORITY_TAG.is_match(line).then(|| Classification {
            matcher: self.name(),
            task_text: line.to_string(),
            owner: None,
        })
    }
}

/// Ordered set of matchers plus the decision-line exclusion.
#[derive(Debug)]
pub struct LineClassifier {
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(vec![
            Box::new(PrefixMatcher::todo()),
            Box::new(PrefixMatcher::action()),
            Box::new(PrefixMatcher::action_item()),
            Box::new(PrefixMatcher::reminder()),
            Box::new(NameToVerbMatcher),
            Box::new(PriorityTagMatcher),
        ])
    }
}

impl LineClassifier {
    /// Build a classifier that tries `matchers` in the given order.
    pub fn new(matchers: Vec<Box<dyn LineMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    /// True when the line records a decision rather than a task.
    pub fn is_decision(line: &str) -> bool {
        DECISION_MARKER.is_match(line)
    }

    /// Classify a trimmed, non-empty line; `None` means it is not an action item.
    pub fn classify(&self, line: &str) -> Option<Classification> {
        if Self::is_decision(line) {
            trace!("Skipping decision line: {}", line);
            return None;
        }

        self.matchers.iter().find_map(|matcher| matcher.classify(line))
    }
}
