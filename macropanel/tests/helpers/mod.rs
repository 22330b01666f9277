// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;

use macropanel::{CanonicalDate, Feature, Frequency, Pipeline, PipelineBuilder, RawSeries, SeriesSpec};
use macropanel_mock::MockSource;

/// Canonical date shorthand.
pub fn cd(y: i32, m: u32) -> CanonicalDate {
    CanonicalDate::new(y, m).unwrap()
}

/// Float comparison tolerant to interpolation rounding.
pub fn approx(got: Option<f64>, want: f64) -> bool {
    got.is_some_and(|g| (g - want).abs() <= 1e-9 * want.abs().max(1.0))
}

/// Raw monthly series with `YYYY:MM` labels.
pub fn monthly(name: &str, rows: &[((i32, u32), Option<f64>)]) -> RawSeries {
    let mut s = RawSeries::new(name, Frequency::Monthly);
    for &((y, m), v) in rows {
        s.push(format!("{y}:{m:02}"), v);
    }
    s
}

/// Builder with the mock source registered.
pub fn mock_builder() -> PipelineBuilder {
    Pipeline::builder().with_source(Arc::new(MockSource::new()))
}

/// The full fixture panel: two price indices with inflation features, GDP,
/// payrolls, and index closes, anchored on GDP.
pub fn fixture_pipeline() -> Pipeline {
    mock_builder()
        .series(SeriesSpec::new("pcpi").suffix("_pcpi").features(Feature::inflation_set()))
        .series(SeriesSpec::new("pcpix").suffix("_pcpix").features(Feature::inflation_set()))
        .series(SeriesSpec::new("gdp").quarterly())
        .series(SeriesSpec::new("employment").name("PAYEMS"))
        .series(SeriesSpec::new("spx").suffix("_spx"))
        .anchor("GDP")
        .build()
        .unwrap()
}
