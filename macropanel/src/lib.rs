//! macropanel builds one monthly, date-indexed panel out of heterogeneous
//! macroeconomic series.
//!
//! Overview
//! - Routes each declared series to the first registered `SeriesSource` that
//!   provides its key.
//! - Normalizes every raw date encoding (`2020:Q3`, `2020:07`, Unix seconds, ...)
//!   to a first-of-month key; collisions are errors.
//! - Upsamples quarterly series to monthly by linear interpolation without
//!   extrapolation.
//! - Derives change columns (monthly percent change, six-month change,
//!   annualized rate) on calendar lags.
//! - Outer-joins everything on date, columns in declaration order, and trims
//!   leading rows before the anchor series' first observation.
//!
//! Series are prepared in parallel on the rayon pool; results are merged in
//! declaration order so output never depends on scheduling.
//!
//! Example
//! ```
//! use std::sync::Arc;
//! use macropanel::{Feature, Pipeline, SeriesSpec};
//! use macropanel_mock::MockSource;
//!
//! let report = Pipeline::builder()
//!     .with_source(Arc::new(MockSource::new()))
//!     .series(SeriesSpec::new("pcpi").suffix("_pcpi").features(Feature::inflation_set()))
//!     .series(SeriesSpec::new("gdp").quarterly())
//!     .anchor("GDP")
//!     .build()?
//!     .run()?;
//!
//! assert_eq!(report.panel.column_names().next(), Some("Raw_pcpi"));
//! assert_eq!(report.anchor_start.map(|d| d.to_string()).as_deref(), Some("2019-04-01"));
//! # Ok::<(), macropanel::PanelError>(())
//! ```
#![warn(missing_docs)]

mod core;
mod prepare;

pub use crate::core::{Pipeline, PipelineBuilder};

pub use macropanel_core::{
    CanonicalDate, Column, ColumnCoverage, DataPaths, Feature, Frequency, Observation, Panel,
    PanelConfig, PanelError, PanelReport, PipelineManifest, RawDate, RawSeries, SeriesSource,
    SeriesSpec, TimeSeries,
};
