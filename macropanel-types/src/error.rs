use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Frequency;

/// Unified error type for the macropanel workspace.
///
/// Every variant is a local validation or data-integrity failure. None of them is
/// transient, so callers should fix the input rather than retry.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PanelError {
    /// A raw date value matched no supported encoding or named an impossible month/year.
    #[error("malformed date {raw:?}: {reason}")]
    MalformedDate {
        /// The offending raw value as the loader supplied it.
        raw: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An operation that needs at least one data point received none.
    #[error("empty series: {series}")]
    EmptySeries {
        /// Name of the series (or operation input) that was empty.
        series: String,
    },

    /// Merge received a different number of series and suffixes.
    #[error("suffix count mismatch: {series} series, {suffixes} suffixes")]
    SuffixCountMismatch {
        /// Number of series passed to the merge.
        series: usize,
        /// Number of suffixes passed to the merge.
        suffixes: usize,
    },

    /// Two series resolved to the same disambiguated column name.
    #[error("duplicate column: {column}")]
    DuplicateColumn {
        /// The colliding column name.
        column: String,
    },

    /// The anchor column requested by the range filter is not in the panel.
    #[error("anchor column not found: {column}")]
    AnchorColumnNotFound {
        /// Requested anchor column.
        column: String,
    },

    /// The anchor column has no non-null value, so no lower bound exists.
    #[error("anchor column has no observations: {column}")]
    AnchorAllNull {
        /// Requested anchor column.
        column: String,
    },

    /// Two rows of one series collapsed to the same canonical date.
    #[error("duplicate date {date} in series {series}")]
    DuplicateDate {
        /// Series containing the collision.
        series: String,
        /// Canonical date both rows mapped to.
        date: String,
    },

    /// Series points were not in ascending date order.
    #[error("dates out of order in series {series} at {date}")]
    UnsortedDates {
        /// Series containing the regression.
        series: String,
        /// First date that was not after its predecessor.
        date: String,
    },

    /// A series value was NaN or infinite.
    #[error("non-finite value {value} at {date} in series {series}")]
    NonFiniteValue {
        /// Series containing the value.
        series: String,
        /// Date of the offending observation.
        date: String,
        /// The value as written (`NaN`, `inf`, `-inf`).
        value: String,
    },

    /// A quarterly series carried a date that is not the first month of a quarter.
    #[error("date {date} in series {series} is not a quarter start")]
    NotQuarterAligned {
        /// Series containing the misaligned point.
        series: String,
        /// The misaligned canonical date.
        date: String,
    },

    /// A series has a different frequency than the operation requires.
    #[error("series {series} has frequency {found}, expected {expected}")]
    FrequencyMismatch {
        /// Offending series.
        series: String,
        /// Frequency the operation requires.
        expected: Frequency,
        /// Frequency that was declared or inferred.
        found: Frequency,
    },

    /// A panel column does not have exactly one value per row.
    #[error("column {column} has {found} values, expected {expected}")]
    RaggedColumn {
        /// Offending column.
        column: String,
        /// Number of rows in the panel.
        expected: usize,
        /// Number of values in the column.
        found: usize,
    },

    /// A loader or exporter failed (I/O, parse errors in a raw file, etc.).
    #[error("{name} failed: {msg}")]
    Source {
        /// Name of the source or exporter.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// No registered source could provide the requested series.
    #[error("not found: {what}")]
    NotFound {
        /// Description of what was requested.
        what: String,
    },

    /// Invalid builder or configuration argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An error raised while processing one named series.
    #[error("series {series}: {error}")]
    InSeries {
        /// Series key or name the error belongs to.
        series: String,
        /// The underlying failure.
        error: Box<PanelError>,
    },
}

impl PanelError {
    /// Helper: build a `MalformedDate` error.
    pub fn malformed_date(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDate {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build an `EmptySeries` error.
    pub fn empty_series(series: impl Into<String>) -> Self {
        Self::EmptySeries {
            series: series.into(),
        }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Attach the series key to an error.
    ///
    /// Already-tagged errors are returned unchanged so nesting stays one level deep.
    #[must_use]
    pub fn in_series(self, series: impl Into<String>) -> Self {
        match self {
            e @ Self::InSeries { .. } => e,
            other => Self::InSeries {
                series: series.into(),
                error: Box::new(other),
            },
        }
    }

    /// The innermost error, skipping `InSeries` context wrappers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::InSeries { error, .. } => error.root_cause(),
            other => other,
        }
    }

    /// Returns true if the error describes bad input data rather than bad wiring.
    ///
    /// Configuration and routing failures (`InvalidArg`, `NotFound`, `Source`) are
    /// not data-integrity problems.
    #[must_use]
    pub fn is_data_integrity(&self) -> bool {
        !matches!(
            self.root_cause(),
            Self::InvalidArg(_) | Self::NotFound { .. } | Self::Source { .. }
        )
    }
}
