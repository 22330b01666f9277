use std::sync::Arc;

use macropanel_core::{
    Frequency, PanelError, SeriesSource, SeriesSpec, TimeSeries, derive_feature,
    interpolate_quarterly, normalize_series, verify_frequency,
};

use crate::core::Pipeline;

impl Pipeline {
    pub(crate) fn route(&self, key: &str) -> Result<&Arc<dyn SeriesSource>, PanelError> {
        self.sources
            .iter()
            .find(|s| s.provides(key))
            .ok_or_else(|| PanelError::not_found(format!("no source provides {key}")))
    }

    /// Base column first, then one column per declared feature.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::prepare",
            skip(self, spec),
            fields(key = %spec.key),
        )
    )]
    pub(crate) fn prepare(&self, spec: &SeriesSpec) -> Result<Vec<TimeSeries>, PanelError> {
        self.prepare_inner(spec).map_err(|e| tag(e, &spec.key))
    }

    fn prepare_inner(&self, spec: &SeriesSpec) -> Result<Vec<TimeSeries>, PanelError> {
        let source = self.route(&spec.key)?;
        let mut raw = source.load(&spec.key)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = %spec.key,
            source = source.name(),
            rows = raw.points.len(),
            "loaded series"
        );

        if let Some(name) = &spec.name {
            raw.name.clone_from(name);
        }
        raw.frequency = spec.frequency;

        let series = normalize_series(raw)?;
        if self.cfg.verify_frequency {
            verify_frequency(&series)?;
        }
        let base = match series.frequency() {
            Frequency::Quarterly => interpolate_quarterly(&series)?,
            Frequency::Monthly => series,
        };

        let mut out = Vec::with_capacity(1 + spec.features.len());
        for feature in &spec.features {
            out.push(derive_feature(&base, *feature)?);
        }
        out.insert(0, base);
        Ok(out)
    }
}

// Errors from inside one series carry its declared key, replacing any name tag.
fn tag(err: PanelError, key: &str) -> PanelError {
    match err {
        PanelError::InSeries { error, .. } => (*error).in_series(key),
        other => other.in_series(key),
    }
}
