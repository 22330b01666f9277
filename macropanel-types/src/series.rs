//! Series containers: raw loader output and validated, canonical-dated series.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{CanonicalDate, PanelError, RawDate};

/// Native reporting cadence of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// One observation per calendar month.
    #[default]
    Monthly,
    /// One observation per calendar quarter, keyed on the quarter's first month.
    Quarterly,
}

impl Frequency {
    /// Calendar months between consecutive observations.
    #[must_use]
    pub const fn step_months(self) -> i64 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
        }
    }

    /// Inverse of [`step_months`](Self::step_months).
    #[must_use]
    pub const fn from_step_months(step: i64) -> Option<Self> {
        match step {
            1 => Some(Self::Monthly),
            3 => Some(Self::Quarterly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        })
    }
}

/// A series exactly as a loader produced it; dates are still in source encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Value column name.
    pub name: String,
    /// Declared native cadence.
    pub frequency: Frequency,
    /// Rows in file order.
    pub points: Vec<(RawDate, Option<f64>)>,
}

impl RawSeries {
    /// Create an empty raw series.
    pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            frequency,
            points: Vec::new(),
        }
    }

    /// Append one row.
    pub fn push(&mut self, date: impl Into<RawDate>, value: Option<f64>) {
        self.points.push((date.into(), value));
    }
}

/// One dated observation. `value` is `None` when the source has no number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Canonical month key.
    pub date: CanonicalDate,
    /// Observed or interpolated value.
    pub value: Option<f64>,
}

/// A named, frequency-tagged series on canonical dates.
///
/// Dates are strictly increasing. The only way to build one is [`TimeSeries::new`],
/// which checks that; instances are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    name: String,
    frequency: Frequency,
    points: Vec<Observation>,
}

impl TimeSeries {
    /// Validate and build a series.
    ///
    /// # Errors
    /// - `PanelError::DuplicateDate` if a date repeats.
    /// - `PanelError::UnsortedDates` if a date is earlier than its predecessor.
    /// - `PanelError::NonFiniteValue` if a value is NaN or infinite. Missing
    ///   values must be `None`.
    pub fn new(
        name: impl Into<String>,
        frequency: Frequency,
        points: Vec<Observation>,
    ) -> Result<Self, PanelError> {
        let name = name.into();
        if let Some(p) = points
            .iter()
            .find(|p| p.value.is_some_and(|v| !v.is_finite()))
        {
            return Err(PanelError::NonFiniteValue {
                series: name,
                date: p.date.to_string(),
                value: p.value.map(|v| v.to_string()).unwrap_or_default(),
            });
        }
        for pair in points.windows(2) {
            let (prev, cur) = (pair[0].date, pair[1].date);
            if cur == prev {
                return Err(PanelError::DuplicateDate {
                    series: name,
                    date: cur.to_string(),
                });
            }
            if cur < prev {
                return Err(PanelError::UnsortedDates {
                    series: name,
                    date: cur.to_string(),
                });
            }
        }
        Ok(Self {
            name,
            frequency,
            points,
        })
    }

    /// Convenience constructor from `(date, value)` pairs.
    ///
    /// # Errors
    /// Same as [`TimeSeries::new`].
    pub fn from_pairs<I>(
        name: impl Into<String>,
        frequency: Frequency,
        pairs: I,
    ) -> Result<Self, PanelError>
    where
        I: IntoIterator<Item = (CanonicalDate, Option<f64>)>,
    {
        let points = pairs
            .into_iter()
            .map(|(date, value)| Observation { date, value })
            .collect();
        Self::new(name, frequency, points)
    }

    /// Series name; becomes the column stem when merged.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared cadence.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Observations in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    /// Number of rows, including null ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series has no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = CanonicalDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Value at `date`; `None` both for a missing row and for a null value.
    #[must_use]
    pub fn value_at(&self, date: CanonicalDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .and_then(|i| self.points[i].value)
    }

    /// First date carrying a non-null value.
    #[must_use]
    pub fn first_valid(&self) -> Option<CanonicalDate> {
        self.points.iter().find(|p| p.value.is_some()).map(|p| p.date)
    }

    /// Last date carrying a non-null value.
    #[must_use]
    pub fn last_valid(&self) -> Option<CanonicalDate> {
        self.points
            .iter()
            .rev()
            .find(|p| p.value.is_some())
            .map(|p| p.date)
    }

    /// A copy of this series under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frequency: self.frequency,
            points: self.points.clone(),
        }
    }
}
