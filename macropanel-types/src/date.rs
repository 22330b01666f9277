//! Canonical monthly date key and the raw date encodings loaders hand over.

use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::PanelError;

/// Smallest year accepted as a canonical date.
pub const MIN_YEAR: i32 = 1000;
/// Largest year accepted as a canonical date.
pub const MAX_YEAR: i32 = 9999;

/// The first calendar day of a month; the join key shared by every series.
///
/// The day component is always 1. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Build the key for `year-month-01`.
    ///
    /// # Errors
    /// Returns `PanelError::MalformedDate` if `month` is not in `1..=12` or `year`
    /// is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u32) -> Result<Self, PanelError> {
        if !(1..=12).contains(&month) {
            return Err(PanelError::malformed_date(
                format!("{year:04}-{month:02}"),
                format!("month {month} outside 1..=12"),
            ));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PanelError::malformed_date(
                format!("{year}-{month:02}"),
                format!("year {year} outside {MIN_YEAR}..={MAX_YEAR}"),
            ));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| PanelError::malformed_date(format!("{year}-{month:02}"), "no such date"))
    }

    /// Truncate an arbitrary calendar date to the first of its month.
    ///
    /// # Errors
    /// Returns `PanelError::MalformedDate` if the year is out of range.
    pub fn from_date(date: NaiveDate) -> Result<Self, PanelError> {
        Self::new(date.year(), date.month())
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Calendar month, `1..=12`.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// The underlying `NaiveDate` (always day 1).
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Months elapsed since year 0, used for calendar arithmetic.
    const fn ordinal(year: i32, month: u32) -> i64 {
        year as i64 * 12 + (month as i64 - 1)
    }

    /// Signed number of calendar months from `self` to `other`.
    ///
    /// `2020-01-01.months_until(2020-04-01) == 3`.
    #[must_use]
    pub fn months_until(self, other: Self) -> i64 {
        Self::ordinal(other.year(), other.month()) - Self::ordinal(self.year(), self.month())
    }

    /// Shift by a signed number of calendar months.
    ///
    /// Returns `None` if the result falls outside the accepted year range.
    #[must_use]
    pub fn add_months(self, months: i64) -> Option<Self> {
        let target = Self::ordinal(self.year(), self.month()).checked_add(months)?;
        let year = i32::try_from(target.div_euclid(12)).ok()?;
        let month = u32::try_from(target.rem_euclid(12) + 1).ok()?;
        Self::new(year, month).ok()
    }

    /// The following month.
    #[must_use]
    pub fn succ(self) -> Option<Self> {
        self.add_months(1)
    }

    /// True for January, April, July, and October.
    #[must_use]
    pub fn is_quarter_start(self) -> bool {
        matches!(self.month(), 1 | 4 | 7 | 10)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CanonicalDate {
    type Err = PanelError;

    /// Parses `YYYY-MM-01`. Any other day is rejected; use the normalizer for
    /// loose encodings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| PanelError::malformed_date(s, e.to_string()))?;
        if date.day() != 1 {
            return Err(PanelError::malformed_date(s, "canonical dates fall on day 1"));
        }
        Self::from_date(date)
    }
}

impl TryFrom<NaiveDate> for CanonicalDate {
    type Error = PanelError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(date)
    }
}

impl From<CanonicalDate> for NaiveDate {
    fn from(d: CanonicalDate) -> Self {
        d.0
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A date as it appears in a source file, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RawDate {
    /// Textual label: `2020:Q3`, `2020:M07`, `2020:07`, `2020-07-15`, `07/01/2020`.
    Text(String),
    /// Unix timestamp in seconds (UTC).
    Timestamp(i64),
    /// A calendar date already parsed by the loader.
    Date(NaiveDate),
}

impl fmt::Display for RawDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawDate {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for RawDate {
    fn from(ts: i64) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<NaiveDate> for RawDate {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<CanonicalDate> for RawDate {
    fn from(d: CanonicalDate) -> Self {
        Self::Date(d.as_naive())
    }
}
