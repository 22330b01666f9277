use std::collections::HashSet;
use std::sync::Arc;

use macropanel_core::{
    PanelConfig, PanelError, PanelReport, PipelineManifest, SeriesSource, SeriesSpec,
    first_valid_date, merge,
};
use rayon::prelude::*;

/// A validated set of sources, series declarations, and engine knobs.
///
/// Build one with [`Pipeline::builder`] or [`Pipeline::from_manifest`], then call
/// [`run`](Pipeline::run) as often as needed; each run reloads every series.
pub struct Pipeline {
    pub(crate) sources: Vec<Arc<dyn SeriesSource>>,
    pub(crate) series: Vec<SeriesSpec>,
    pub(crate) cfg: PanelConfig,
}

/// Builder for constructing a [`Pipeline`].
pub struct PipelineBuilder {
    sources: Vec<Arc<dyn SeriesSource>>,
    series: Vec<SeriesSpec>,
    cfg: PanelConfig,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder {
    /// Create a builder with no sources, no series, no anchor, and frequency
    /// verification on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            series: vec![],
            cfg: PanelConfig::default(),
        }
    }

    /// Register a source.
    ///
    /// Each key is routed to the first registered source whose `provides` returns
    /// true, so registration order is priority order.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Declare a series. Columns appear in the panel in declaration order.
    #[must_use]
    pub fn series(mut self, spec: SeriesSpec) -> Self {
        self.series.push(spec);
        self
    }

    /// Declare several series at once.
    #[must_use]
    pub fn series_all(mut self, specs: impl IntoIterator<Item = SeriesSpec>) -> Self {
        self.series.extend(specs);
        self
    }

    /// Trim rows before the first non-null value of this merged column.
    ///
    /// The name is the final column name, suffix included.
    #[must_use]
    pub fn anchor(mut self, column: impl Into<String>) -> Self {
        self.cfg.anchor = Some(column.into());
        self
    }

    /// Toggle the check that a series' dates step at its declared frequency.
    #[must_use]
    pub const fn verify_frequency(mut self, yes: bool) -> Self {
        self.cfg.verify_frequency = yes;
        self
    }

    /// Replace all engine knobs at once.
    #[must_use]
    pub fn config(mut self, cfg: PanelConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Validate and build the pipeline.
    ///
    /// # Errors
    /// Returns `PanelError::InvalidArg` when no source or no series is registered,
    /// when a series key is empty, when two series share both key and suffix,
    /// or when the anchor name is empty.
    pub fn build(self) -> Result<Pipeline, PanelError> {
        if self.sources.is_empty() {
            return Err(PanelError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }
        if self.series.is_empty() {
            return Err(PanelError::InvalidArg(
                "no series declared; add at least one via series(...)".to_string(),
            ));
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(self.series.len());
        for spec in &self.series {
            if spec.key.trim().is_empty() {
                return Err(PanelError::InvalidArg("series key must not be empty".into()));
            }
            if !seen.insert((spec.key.as_str(), spec.suffix.as_str())) {
                return Err(PanelError::InvalidArg(format!(
                    "series {:?} declared twice with suffix {:?}",
                    spec.key, spec.suffix
                )));
            }
        }
        if self.cfg.anchor.as_deref().is_some_and(str::is_empty) {
            return Err(PanelError::InvalidArg("anchor column must not be empty".into()));
        }

        Ok(Pipeline {
            sources: self.sources,
            series: self.series,
            cfg: self.cfg,
        })
    }
}

impl Pipeline {
    /// Start building a new pipeline.
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Build a pipeline from a declarative manifest and the sources that serve it.
    ///
    /// `manifest.paths` is not used here; hand it to file-backed sources and
    /// exporters instead.
    ///
    /// # Errors
    /// Same as [`PipelineBuilder::build`].
    pub fn from_manifest<I>(manifest: PipelineManifest, sources: I) -> Result<Self, PanelError>
    where
        I: IntoIterator<Item = Arc<dyn SeriesSource>>,
    {
        sources
            .into_iter()
            .fold(PipelineBuilder::new(), PipelineBuilder::with_source)
            .series_all(manifest.series)
            .config(manifest.panel)
            .build()
    }

    /// Declared series, in merge order.
    #[must_use]
    pub fn series(&self) -> &[SeriesSpec] {
        &self.series
    }

    /// Engine knobs in effect.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.cfg
    }

    /// Load, prepare, merge, and trim every declared series.
    ///
    /// Each series is prepared independently (load, normalize, verify frequency,
    /// interpolate if quarterly, derive features) on the rayon pool. Columns are
    /// then merged in declaration order: each series' base column followed by
    /// its features, with the series suffix appended to all of them. Finally the
    /// anchor filter is applied when configured.
    ///
    /// # Errors
    /// The first failure in declaration order, wrapped in `PanelError::InSeries`
    /// with the series key when it comes from one series. Merge and anchor
    /// failures are returned as is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel::run",
            skip(self),
            fields(series = self.series.len(), sources = self.sources.len()),
            err,
        )
    )]
    pub fn run(&self) -> Result<PanelReport, PanelError> {
        let prepared: Vec<_> = self
            .series
            .par_iter()
            .map(|spec| self.prepare(spec))
            .collect();

        let mut columns = Vec::new();
        let mut suffixes = Vec::new();
        for (spec, result) in self.series.iter().zip(prepared) {
            for s in result? {
                columns.push(s);
                suffixes.push(spec.suffix.as_str());
            }
        }
        let panel = merge(&columns, &suffixes)?;

        let Some(anchor) = self.cfg.anchor.as_deref() else {
            return Ok(PanelReport::new(panel, None));
        };
        let start = first_valid_date(&panel, anchor)?;
        let panel = panel.truncate_before(start);

        #[cfg(feature = "tracing")]
        tracing::info!(
            rows = panel.height(),
            columns = panel.width(),
            start = %start,
            "built panel"
        );

        Ok(PanelReport::new(panel, Some(start)))
    }
}
