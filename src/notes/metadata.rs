//! Owner, due date and priority extraction
//!
//! These patterns run over the whole original line, independently of
//! which classifier form accepted it.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use super::dates::DateNormalizer;
use super::types::Priority;

static OWNER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Owner:\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").expect("valid regex")
});

static OWNER_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((?i:owner)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\)").expect("valid regex")
});

static NO_OWNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(no\s+owner").expect("valid regex"));

static DUE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Dd]ue:?\s+([^;.\n]+)").expect("valid regex"));

static BY_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bby\s+([^;.\n]+)").expect("valid regex"));

static TRAILING_PRIORITY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\(P[012]\)\s*$").expect("valid regex"));

static PRIORITY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(?\b(P[012])\b\)?").expect("valid regex"));

static PRIORITY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Priority:\s*(P[012])\b").expect("valid regex"));

/// What a line says about who owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerHint {
    /// `Owner: Name` or `(owner Name)`
    Named(String),
    /// `(no owner ...)`
    ExplicitlyUnassigned,
    /// Nothing owner-related on the line
    Unspecified,
}

/// Metadata found on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMetadata {
    pub owner: OwnerHint,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Extracts owner, due date and priority from raw lines.
#[derive(Debug, Clone, Copy)]
pub struct MetadataExtractor {
    dates: DateNormalizer,
}

impl MetadataExtractor {
    pub fn new(dates: DateNormalizer) -> Self {
        Self { dates }
    }

    pub fn extract(&self, line: &str) -> LineMetadata {
        LineMetadata {
            owner: self.extract_owner(line),
            due_date: self.extract_due_date(line),
            priority: self.extract_priority(line),
        }
    }

    pub fn extract_owner(&self, line: &str) -> OwnerHint {
        if let Some(caps) = OWNER_LABEL.captures(line) {
            return OwnerHint::Named(caps[1].trim().to_string());
        }
        if let Some(caps) = OWNER_PAREN.captures(line) {
            return OwnerHint::Named(caps[1].trim().to_string());
        }
        if NO_OWNER.is_match(line) {
            return OwnerHint::ExplicitlyUnassigned;
        }
        OwnerHint::Unspecified
    }

    /// A `Due:`/`due` phrase is tried first, then a `by ...` phrase. Only the
    /// first occurrence of each is considered.
    pub fn extract_due_date(&self, line: &str) -> Option<NaiveDate> {
        [&*DUE_PHRASE, &*BY_PHRASE].into_iter().find_map(|pattern| {
            let caps = pattern.captures(line)?;
            let fragment = date_fragment(&caps[1]);
            let date = self.dates.normalize(&fragment);
            if date.is_none() {
                trace!("Could not interpret '{}' as a due date", fragment);
            }
            date
        })
    }

    pub fn extract_priority(&self, line: &str) -> Priority {
        PRIORITY_TOKEN
            .captures(line)
            .or_else(|| PRIORITY_LABEL.captures(line))
            .and_then(|caps| Priority::from_tag(&caps[1]))
            .unwrap_or_default()
    }
}

fn date_fragment(captured: &str) -> String {
    let fragment = captured.trim().trim_end_matches('.');
    TRAILING_PRIORITY_TAG.replace(fragment, "").into_owned()
}
