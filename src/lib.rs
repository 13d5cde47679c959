//! # Actionize
//!
//! Extracts structured action items (task, owner, due date, priority) from
//! free-text meeting notes and renders them as Markdown and JSON reports.
//!
//! The pipeline is linear and pure: text is split into lines, each line is
//! classified, metadata is pulled from the matching lines, task text is
//! cleaned, and the resulting items are sorted and rendered.
//!
//! ## Quick Start
//!
//! ```rust
//! use actionize::{parse, render_markdown};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 6).unwrap();
//! let items = parse("TODO: Update onboarding doc. Owner: Priya. Due: next Friday.", today);
//!
//! assert_eq!(items[0].owner, "Priya");
//! assert_eq!(items[0].due_date_iso(), "2026-02-13");
//! assert!(render_markdown(&items).contains("@Priya (due 2026-02-13)"));
//! ```

/// Action-item extraction from meeting notes.
///
/// Line classification, metadata extraction, task text cleanup and
/// free-form date normalization.
pub mod notes;

/// Sorting and Markdown/JSON rendering of extracted items.
pub mod report;

/// Environment constants and path utilities.
pub mod env;

// CLI module for command-line interface
pub mod cli;

pub use notes::{ActionItem, DateNormalizer, NotesParser, Priority, UNASSIGNED, parse};
pub use report::{render_json, render_markdown, sort_items};
