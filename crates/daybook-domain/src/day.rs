//! Calendar-day value type used for retention queries
//!
//! Day filtering throughout Daybook is string equality on a `YYYY-MM-DD`
//! value derived once at append time, not timestamp-range comparison. The
//! day is taken in the host's local timezone; the store persists it next to
//! the capture so later queries are independent of the querying process's
//! timezone.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar day in `YYYY-MM-DD` form
///
/// # Examples
///
/// ```
/// use daybook_domain::CaptureDay;
///
/// let day: CaptureDay = "2025-01-19".parse().unwrap();
/// assert_eq!(day.to_string(), "2025-01-19");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaptureDay(NaiveDate);

impl CaptureDay {
    /// Construct from year, month, day
    ///
    /// Returns `None` for out-of-range dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The calendar day a UTC instant falls on in the host's local timezone
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&Local).date_naive())
    }

    /// Today's calendar day in the host's local timezone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The underlying naive date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CaptureDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CaptureDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|e| format!("Invalid day '{}': {}", s, e))
    }
}

impl TryFrom<String> for CaptureDay {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CaptureDay> for String {
    fn from(day: CaptureDay) -> Self {
        day.to_string()
    }
}

/// Render an optional day filter for the export contract: the day string, or
/// the sentinel `"all"` when no day was requested.
pub fn day_label(day: Option<CaptureDay>) -> String {
    match day {
        Some(d) => d.to_string(),
        None => "all".to_string(),
    }
}
