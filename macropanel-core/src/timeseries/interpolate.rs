use crate::{CanonicalDate, Frequency, Observation, PanelError, TimeSeries};

/// Upsample a quarterly series to monthly by linear interpolation.
///
/// - The output grid is every month from the first to the last input date, inclusive.
/// - Months carrying an input value copy it exactly.
/// - Months strictly between two consecutive known values get the linear blend,
///   weighted by calendar-month distance (not day count).
/// - No extrapolation: months before the first known value or after the last one
///   stay null. Nothing is forward-filled.
///
/// # Errors
/// - `PanelError::EmptySeries` if the series has no points.
/// - `PanelError::FrequencyMismatch` if the series is not quarterly.
/// - `PanelError::NotQuarterAligned` if a date is not January, April, July, or October.
///
/// ```
/// use macropanel_core::{interpolate_quarterly, CanonicalDate, Frequency, TimeSeries};
/// let d = |m| CanonicalDate::new(2020, m).unwrap();
/// let gdp = TimeSeries::from_pairs("GDP", Frequency::Quarterly, [(d(1), Some(100.0)), (d(4), Some(110.0))]).unwrap();
/// let monthly = interpolate_quarterly(&gdp).unwrap();
/// assert_eq!(monthly.value_at(d(1)), Some(100.0));
/// assert_eq!(monthly.value_at(d(4)), Some(110.0));
/// assert!((monthly.value_at(d(2)).unwrap() - (100.0 + 10.0 / 3.0)).abs() < 1e-9);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "macropanel_core::interpolate_quarterly",
        skip(series),
        fields(series = %series.name(), points = series.len()),
    )
)]
pub fn interpolate_quarterly(series: &TimeSeries) -> Result<TimeSeries, PanelError> {
    let points = series.points();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(PanelError::empty_series(series.name()));
    };
    if series.frequency() != Frequency::Quarterly {
        return Err(PanelError::FrequencyMismatch {
            series: series.name().to_string(),
            expected: Frequency::Quarterly,
            found: series.frequency(),
        });
    }
    if let Some(p) = points.iter().find(|p| !p.date.is_quarter_start()) {
        return Err(PanelError::NotQuarterAligned {
            series: series.name().to_string(),
            date: p.date.to_string(),
        });
    }

    let known: Vec<(CanonicalDate, f64)> = points
        .iter()
        .filter_map(|p| p.value.map(|v| (p.date, v)))
        .collect();

    let span = first.date.months_until(last.date);
    let mut out: Vec<Observation> = Vec::with_capacity(usize::try_from(span + 1).unwrap_or(0));
    // `next` indexes the first known point dated on or after the current grid month.
    let mut next = 0usize;
    for offset in 0..=span {
        let date = first.date.add_months(offset).ok_or_else(|| {
            PanelError::malformed_date(first.date.to_string(), "monthly grid leaves year range")
        })?;
        while next < known.len() && known[next].0 < date {
            next += 1;
        }
        let value = match known.get(next) {
            Some(&(d, v)) if d == date => Some(v),
            Some(&(d1, v1)) if next > 0 => {
                let (d0, v0) = known[next - 1];
                Some(blend(v0, v1, d0.months_until(date), d0.months_until(d1)))
            }
            _ => None,
        };
        out.push(Observation { date, value });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        series = %series.name(),
        months = out.len(),
        known = known.len(),
        "interpolated quarterly series to monthly"
    );

    TimeSeries::new(series.name(), Frequency::Monthly, out)
}

#[allow(clippy::cast_precision_loss)]
fn blend(v0: f64, v1: f64, elapsed: i64, gap: i64) -> f64 {
    (v1 - v0).mul_add(elapsed as f64 / gap as f64, v0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cd(y: i32, m: u32) -> CanonicalDate {
        CanonicalDate::new(y, m).unwrap()
    }

    fn quarterly(pairs: &[((i32, u32), Option<f64>)]) -> TimeSeries {
        TimeSeries::from_pairs(
            "GDP",
            Frequency::Quarterly,
            pairs.iter().map(|&((y, m), v)| (cd(y, m), v)),
        )
        .unwrap()
    }

    #[test]
    fn single_point_copies_value() {
        let s = quarterly(&[((2020, 4), Some(5.0))]);
        let out = interpolate_quarterly(&s).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.value_at(cd(2020, 4)), Some(5.0));
        assert_eq!(out.frequency(), Frequency::Monthly);
    }

    #[test]
    fn bridges_null_quarters() {
        // Q2 missing: Jan..Jul bridged across six months.
        let s = quarterly(&[((2020, 1), Some(0.0)), ((2020, 4), None), ((2020, 7), Some(6.0))]);
        let out = interpolate_quarterly(&s).unwrap();
        for m in 1..=7 {
            let v = out.value_at(cd(2020, m)).unwrap();
            assert!((v - f64::from(m - 1)).abs() < 1e-12, "month {m}: {v}");
        }
    }

    #[test]
    fn rejects_monthly_and_misaligned() {
        let monthly = TimeSeries::from_pairs("x", Frequency::Monthly, [(cd(2020, 1), Some(1.0))]).unwrap();
        assert!(matches!(
            interpolate_quarterly(&monthly),
            Err(PanelError::FrequencyMismatch { .. })
        ));
        let misaligned = quarterly(&[((2020, 2), Some(1.0))]);
        assert!(matches!(
            interpolate_quarterly(&misaligned),
            Err(PanelError::NotQuarterAligned { .. })
        ));
    }
}
