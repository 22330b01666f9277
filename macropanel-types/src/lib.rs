//! Macropanel data model, configuration primitives, and the shared error type.
#![warn(missing_docs)]

mod config;
mod date;
mod error;
mod panel;
mod reports;
mod series;

pub use config::{DataPaths, Feature, PanelConfig, PipelineManifest, SeriesSpec};
pub use date::{CanonicalDate, MAX_YEAR, MIN_YEAR, RawDate};
pub use error::PanelError;
pub use panel::{Column, Panel};
pub use reports::{ColumnCoverage, PanelReport};
pub use series::{Frequency, Observation, RawSeries, TimeSeries};
