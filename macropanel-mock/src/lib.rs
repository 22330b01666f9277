//! Deterministic sources for tests and examples.
//!
//! - [`MockSource`]: static fixture series (CPI, core CPI, GDP, payrolls, index closes).
//! - [`DynamicSource`]: per-key behavior driven from a test through a controller.
use macropanel_core::{PanelError, RawSeries, SeriesSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicSource, DynamicSourceController, MockBehavior};

/// Keys served by [`MockSource`], besides the forced-failure key `FAIL`.
///
/// - `pcpi`, `pcpix`: monthly price indices labelled `YYYY:MM`, value column `Raw`.
/// - `gdp`: quarterly real output labelled `YYYY:Qn`, value column `GDP`.
/// - `employment`: monthly payrolls with one unreported month, value column `Raw`.
/// - `spx`: month-end index closes keyed by Unix seconds, value column `close`.
/// - `MALFORMED`: a quarterly series with one unparseable label.
pub const FIXTURE_KEYS: &[&str] = &["pcpi", "pcpix", "gdp", "employment", "spx", "MALFORMED"];

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "macropanel-mock"
    }

    fn provides(&self, key: &str) -> bool {
        key == "FAIL" || FIXTURE_KEYS.contains(&key)
    }

    fn load(&self, key: &str) -> Result<RawSeries, PanelError> {
        if key == "FAIL" {
            return Err(PanelError::source(self.name(), "forced failure: load"));
        }
        fixtures::by_key(key).ok_or_else(|| PanelError::not_found(format!("mock series {key}")))
    }
}
