//! Free-form date normalization
//!
//! Turns human-written date fragments ("next Friday", "2/20", "March 1",
//! "14 March 2026", "2026-02-28") into calendar dates. Relative forms are
//! resolved against the reference date the normalizer was built with, so
//! results never depend on the wall clock.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::{Match, Regex};
use std::sync::LazyLock;
use tracing::trace;

use super::types::iso_date;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid regex"));

static QUARTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^q[1-4]$").expect("valid regex"));

static NEXT_WEEKDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^next\s+(\w+)$").expect("valid regex"));

static SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})(?:/([0-9]{2,4}))?$").expect("valid regex")
});

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w+)\s+([0-9]{1,2})(?:\s*,?\s*([0-9]{4}))?$").expect("valid regex")
});

static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})\s+(\w+)(?:\s*,?\s*([0-9]{4}))?$").expect("valid regex")
});

/// Look up a month by its English name or common abbreviation (any case).
pub fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

/// Look up a weekday by its English name or common abbreviation (any case).
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let weekday = match name.to_lowercase().as_str() {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thurs" | "thur" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Proleptic dates start at year 1; year 0 is rejected.
fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Converts free-form date fragments to calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    today: NaiveDate,
}

impl DateNormalizer {
    /// Create a normalizer that resolves relative dates against `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Interpret `raw` as a date, returning `None` when it is not recognized.
    ///
    /// Forms are tried in a fixed order and the first one that matches
    /// decides the outcome, even when that outcome is `None` (an invalid
    /// `13/40` does not fall through to the month-name forms):
    ///
    /// 1. ISO-8601 `YYYY-MM-DD`
    /// 2. quarter references `Q1`..`Q4`, always rejected as too vague
    /// 3. `next <weekday>`, strictly in the future (7 days out when today is that weekday)
    /// 4. `today` / `tomorrow`
    /// 5. `M/D`, `M/D/YY`, `M/D/YYYY`
    /// 6. `<Month> <Day>[, <Year>]`
    /// 7. `<Day> <Month>[, <Year>]`
    ///
    /// A missing year defaults to the reference year; two-digit years are 20xx.
    pub fn normalize(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(caps) = ISO_DATE.captures(raw) {
            let year = caps[1].parse().ok()?;
            let month = caps[2].parse().ok()?;
            let day = caps[3].parse().ok()?;
            return ymd(year, month, day);
        }

        let lowered = raw.to_lowercase();

        if QUARTER.is_match(&lowered) {
            trace!("Rejecting quarter reference '{}'", raw);
            return None;
        }

        if let Some(caps) = NEXT_WEEKDAY.captures(&lowered) {
            let target = weekday_from_name(&caps[1])?;
            return self.next_weekday(target);
        }

        match lowered.as_str() {
            "today" => return Some(self.today),
            "tomorrow" => return self.today.checked_add_days(Days::new(1)),
            _ => {}
        }

        if let Some(caps) = SLASH_DATE.captures(raw) {
            let month = caps[1].parse().ok()?;
            let day = caps[2].parse().ok()?;
            let year = match caps.get(3) {
                Some(year) => {
                    let year: i32 = year.as_str().parse().ok()?;
                    if year < 100 { year + 2000 } else { year }
                }
                None => self.today.year(),
            };
            return ymd(year, month, day);
        }

        if let Some(caps) = MONTH_DAY.captures(raw)
            && let Some(month) = month_from_name(&caps[1])
        {
            return self.calendar_date(month, &caps[2], caps.get(3));
        }

        if let Some(caps) = DAY_MONTH.captures(raw)
            && let Some(month) = month_from_name(&caps[2])
        {
            return self.calendar_date(month, &caps[1], caps.get(3));
        }

        trace!("Unrecognized date fragment '{}'", raw);
        None
    }

    /// String form of [`normalize`](Self::normalize): `YYYY-MM-DD`, or empty when unrecognized.
    pub fn normalize_iso(&self, raw: &str) -> String {
        self.normalize(raw)
            .map(|d| d.format(iso_date::FORMAT).to_string())
            .unwrap_or_default()
    }

    fn next_weekday(&self, target: Weekday) -> Option<NaiveDate> {
        let current = self.today.weekday().num_days_from_monday();
        let wanted = target.num_days_from_monday();
        let mut days_ahead = (wanted + 7 - current) % 7;
        if days_ahead == 0 {
            days_ahead = 7;
        }
        self.today.checked_add_days(Days::new(u64::from(days_ahead)))
    }

    fn calendar_date(&self, month: u32, day: &str, year: Option<Match<'_>>) -> Option<NaiveDate> {
        let day = day.parse().ok()?;
        let year = match year {
            Some(year) => year.as_str().parse().ok()?,
            None => self.today.year(),
        };
        ymd(year, month, day)
    }
}
