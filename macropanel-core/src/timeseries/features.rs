use crate::{Feature, Frequency, Observation, PanelError, TimeSeries};

/// Derive a change series from a monthly series.
///
/// The result keeps the input's dates and is named [`Feature::column_name`].
/// For each month `t` the base is the input value at `t - k` months, looked up
/// by date, so gaps in the input never shift the lag. A missing, null, or zero
/// base gives a null result, as does a null current value.
///
/// # Errors
/// - `PanelError::FrequencyMismatch` if the input is not monthly.
/// - `PanelError::InvalidArg` if the feature's lag is zero.
pub fn derive_feature(series: &TimeSeries, feature: Feature) -> Result<TimeSeries, PanelError> {
    if series.frequency() != Frequency::Monthly {
        return Err(PanelError::FrequencyMismatch {
            series: series.name().to_string(),
            expected: Frequency::Monthly,
            found: series.frequency(),
        });
    }
    let k = feature.months();
    if k == 0 {
        return Err(PanelError::InvalidArg(format!(
            "feature {} needs a positive lag",
            feature.column_name()
        )));
    }
    let lag = -i64::from(k);
    let scale = match feature {
        Feature::Annualized { .. } => 12.0 / f64::from(k),
        _ => 1.0,
    };

    let points: Vec<Observation> = series
        .points()
        .iter()
        .map(|p| {
            let base = p.date.add_months(lag).and_then(|d| series.value_at(d));
            let value = match (p.value, base) {
                (Some(cur), Some(base)) => match feature {
                    Feature::Diff { .. } => Some(cur - base),
                    Feature::PctChange { .. } | Feature::Annualized { .. } if base != 0.0 => {
                        Some((cur - base) / base * scale)
                    }
                    _ => None,
                },
                _ => None,
            };
            Observation {
                date: p.date,
                value,
            }
        })
        .collect();

    TimeSeries::new(feature.column_name(), Frequency::Monthly, points)
}

/// Relative change over `months`.
///
/// # Errors
/// Same as [`derive_feature`].
pub fn pct_change(series: &TimeSeries, months: u32) -> Result<TimeSeries, PanelError> {
    derive_feature(series, Feature::PctChange { months })
}

/// Absolute change over `months`.
///
/// # Errors
/// Same as [`derive_feature`].
pub fn diff(series: &TimeSeries, months: u32) -> Result<TimeSeries, PanelError> {
    derive_feature(series, Feature::Diff { months })
}

/// Relative change over `months`, scaled to a yearly rate.
///
/// # Errors
/// Same as [`derive_feature`].
pub fn annualized(series: &TimeSeries, months: u32) -> Result<TimeSeries, PanelError> {
    derive_feature(series, Feature::Annualized { months })
}
