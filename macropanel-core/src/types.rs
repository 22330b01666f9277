//! Re-export of the data model from `macropanel-types`.
// Downstream crates can depend on `macropanel-core` alone.

pub use macropanel_types::{CanonicalDate, MAX_YEAR, MIN_YEAR, RawDate};
pub use macropanel_types::{Column, Panel};
pub use macropanel_types::{ColumnCoverage, PanelReport};
pub use macropanel_types::{DataPaths, Feature, PanelConfig, PipelineManifest, SeriesSpec};
pub use macropanel_types::{Frequency, Observation, RawSeries, TimeSeries};
pub use macropanel_types::PanelError;
