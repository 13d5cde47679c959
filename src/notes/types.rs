use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner value used when no owner could be found for an item.
pub const UNASSIGNED: &str = "unassigned";

/// Priority levels an action item can carry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Priority {
    /// Map a `P0`/`P1`/`P2` shorthand tag (any case) to a priority level.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "p0" => Some(Priority::Critical),
            "p1" => Some(Priority::High),
            "p2" => Some(Priority::Normal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single action item extracted from meeting notes.
///
/// Items are built once by the parser and never mutated afterwards; the
/// report layer may reorder them but does not change their fields.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionItem {
    pub task: String,
    pub owner: String,
    #[serde(with = "iso_date")]
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub raw_line: String,
}

impl ActionItem {
    /// Create an item with default metadata: unassigned, no due date, normal priority.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            owner: UNASSIGNED.to_string(),
            due_date: None,
            priority: Priority::Normal,
            raw_line: String::new(),
        }
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_raw_line(mut self, raw_line: impl Into<String>) -> Self {
        self.raw_line = raw_line.into();
        self
    }

    /// True when the owner is a real name rather than the unassigned sentinel.
    pub fn is_assigned(&self) -> bool {
        !self.owner.is_empty() && !self.owner.eq_ignore_ascii_case(UNASSIGNED)
    }

    /// Due date as `YYYY-MM-DD`, or an empty string when there is none.
    pub fn due_date_iso(&self) -> String {
        self.due_date
            .map(|d| d.format(iso_date::FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Serde adapter writing `Option<NaiveDate>` as `"YYYY-MM-DD"` or `""`.
pub(crate) mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.collect_str(&d.format(FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let item = ActionItem::new("Test task");
        assert_eq!(item.owner, UNASSIGNED);
        assert_eq!(item.due_date, None);
        assert_eq!(item.priority, Priority::Normal);
        assert_eq!(item.raw_line, "");
        assert!(!item.is_assigned());
    }

    #[test]
    fn test_equality() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1);
        let a = ActionItem::new("Same").with_owner("Alice").with_due_date(date);
        let b = ActionItem::new("Same").with_owner("Alice").with_due_date(date);
        assert_eq!(a, b);
        assert_ne!(ActionItem::new("Task A"), ActionItem::new("Task B"));
    }

    #[test]
    fn test_priority_from_tag() {
        assert_eq!(Priority::from_tag("P0"), Some(Priority::Critical));
        assert_eq!(Priority::from_tag("p1"), Some(Priority::High));
        assert_eq!(Priority::from_tag("P2"), Some(Priority::Normal));
        assert_eq!(Priority::from_tag("P3"), None);
    }

    #[test]
    fn test_serialized_field_shapes() {
        let item = ActionItem::new("Ship it")
            .with_owner("Grace")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 4, 1))
            .with_priority(Priority::Critical);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["due_date"], "2026-04-01");
        assert_eq!(value["priority"], "critical");

        let undated = serde_json::to_value(ActionItem::new("Someday")).unwrap();
        assert_eq!(undated["due_date"], "");
        assert_eq!(undated["owner"], "unassigned");
    }

    #[test]
    fn test_deserialize_empty_due_date() {
        let json = r#"{"task":"X","owner":"unassigned","due_date":"","priority":"high","raw_line":""}"#;
        let item: ActionItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.due_date, None);
        assert_eq!(item.priority, Priority::High);
    }
}
