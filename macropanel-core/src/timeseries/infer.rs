use crate::{CanonicalDate, Frequency, PanelError, TimeSeries};

/// Estimate a representative step (in calendar months) from positive adjacent
/// date deltas.
///
/// Prefer the mode (most frequent positive delta); if there is no unique mode,
/// return the lower median.
///
/// ```
/// use macropanel_core::{estimate_step_months, CanonicalDate};
/// let d = |y, m| CanonicalDate::new(y, m).unwrap();
/// // Deltas: 3,3,3,6 => unique mode is 3
/// let dates = [d(2020, 1), d(2020, 4), d(2020, 7), d(2020, 10), d(2021, 4)];
/// assert_eq!(estimate_step_months(&dates), Some(3));
/// // Deltas: 1,1,3,3 => lower median is 1
/// let dates = [d(2020, 1), d(2020, 2), d(2020, 3), d(2020, 6), d(2020, 9)];
/// assert_eq!(estimate_step_months(&dates), Some(1));
/// ```
///
/// The input order does not matter; duplicates are ignored. Returns `None` if
/// fewer than two distinct dates are present.
#[must_use]
pub fn estimate_step_months(dates: &[CanonicalDate]) -> Option<i64> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut deltas: Vec<i64> = sorted.windows(2).map(|w| w[0].months_until(w[1])).collect();
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    let mut best_delta = deltas[0];
    let mut best_count = 0usize;
    let mut ties = 0usize;
    for run in deltas.chunk_by(|a, b| a == b) {
        match run.len().cmp(&best_count) {
            core::cmp::Ordering::Greater => {
                best_delta = run[0];
                best_count = run.len();
                ties = 1;
            }
            core::cmp::Ordering::Equal => ties += 1,
            core::cmp::Ordering::Less => {}
        }
    }
    if ties == 1 {
        return Some(best_delta);
    }

    // Lower median, so the answer is a cadence that was actually observed.
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}

/// Infer a series' cadence from its dates: a step of 1 month is monthly, 3 is
/// quarterly, anything else (or too few dates) is `None`.
#[must_use]
pub fn infer_frequency(series: &TimeSeries) -> Option<Frequency> {
    let dates: Vec<CanonicalDate> = series.dates().collect();
    estimate_step_months(&dates).and_then(Frequency::from_step_months)
}

/// Check a series' declared frequency against the one its dates imply.
///
/// A cadence that cannot be inferred passes; only a clear contradiction fails.
///
/// # Errors
/// Returns `PanelError::FrequencyMismatch` when the inferred cadence differs
/// from the declared one.
pub fn verify_frequency(series: &TimeSeries) -> Result<(), PanelError> {
    match infer_frequency(series) {
        Some(found) if found != series.frequency() => Err(PanelError::FrequencyMismatch {
            series: series.name().to_string(),
            expected: series.frequency(),
            found,
        }),
        _ => Ok(()),
    }
}
