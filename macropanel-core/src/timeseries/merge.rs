use std::collections::{BTreeSet, HashSet};

use crate::{CanonicalDate, Column, Frequency, Panel, PanelError, TimeSeries};

/// Outer-join monthly series into one panel on canonical date.
///
/// - `suffixes[i]` is appended to `series[i].name()` to form the column name.
/// - Output rows are the union of all input dates in ascending order; a series
///   without a row at some date contributes null there. No row is dropped.
/// - Columns appear in input order.
///
/// # Errors
/// - `PanelError::SuffixCountMismatch` if the two slices differ in length.
/// - `PanelError::EmptySeries` if no series are given.
/// - `PanelError::FrequencyMismatch` if a series is still quarterly.
/// - `PanelError::DuplicateColumn` if two columns end up with the same name.
///
/// ```
/// use macropanel_core::{merge, CanonicalDate, Frequency, TimeSeries};
/// let d = |m| CanonicalDate::new(2020, m).unwrap();
/// let x = TimeSeries::from_pairs("a", Frequency::Monthly, [(d(1), Some(1.0)), (d(2), Some(2.0))]).unwrap();
/// let y = TimeSeries::from_pairs("a", Frequency::Monthly, [(d(2), Some(5.0)), (d(3), Some(6.0))]).unwrap();
/// let panel = merge(&[x, y], &["_a", "_b"]).unwrap();
/// assert_eq!(panel.column_names().collect::<Vec<_>>(), ["a_a", "a_b"]);
/// assert_eq!(panel.height(), 3);
/// assert_eq!(panel.value(d(1), "a_b"), None);
/// assert_eq!(panel.value(d(3), "a_b"), Some(6.0));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "macropanel_core::merge",
        skip(series, suffixes),
        fields(series = series.len()),
    )
)]
pub fn merge<S: AsRef<str>>(series: &[TimeSeries], suffixes: &[S]) -> Result<Panel, PanelError> {
    if series.len() != suffixes.len() {
        return Err(PanelError::SuffixCountMismatch {
            series: series.len(),
            suffixes: suffixes.len(),
        });
    }
    if series.is_empty() {
        return Err(PanelError::empty_series("merge input"));
    }

    let mut seen: HashSet<String> = HashSet::with_capacity(series.len());
    let mut names: Vec<String> = Vec::with_capacity(series.len());
    for (s, suffix) in series.iter().zip(suffixes) {
        if s.frequency() != Frequency::Monthly {
            return Err(PanelError::FrequencyMismatch {
                series: s.name().to_string(),
                expected: Frequency::Monthly,
                found: s.frequency(),
            });
        }
        let name = format!("{}{}", s.name(), suffix.as_ref());
        if !seen.insert(name.clone()) {
            return Err(PanelError::DuplicateColumn { column: name });
        }
        names.push(name);
    }

    let dates: Vec<CanonicalDate> = series
        .iter()
        .flat_map(TimeSeries::dates)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let columns = series
        .iter()
        .zip(names)
        .map(|(s, name)| Column::new(name, align(s, &dates)))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = dates.len(), "merged series into panel");

    Panel::new(dates, columns)
}

/// Paired form of [`merge`]: each series travels with its suffix.
///
/// # Errors
/// Same as [`merge`], except that a suffix count mismatch cannot occur.
pub fn merge_pairs<I>(pairs: I) -> Result<Panel, PanelError>
where
    I: IntoIterator<Item = (TimeSeries, String)>,
{
    let (series, suffixes): (Vec<TimeSeries>, Vec<String>) = pairs.into_iter().unzip();
    merge(&series, &suffixes)
}

// Both sides are sorted, so one forward pass places every value.
fn align(series: &TimeSeries, dates: &[CanonicalDate]) -> Vec<Option<f64>> {
    let mut values = vec![None; dates.len()];
    let mut row = 0usize;
    for p in series.points() {
        while dates[row] < p.date {
            row += 1;
        }
        values[row] = p.value;
    }
    values
}
