//! macropanel-core
//!
//! Transforms that turn raw macro series into one monthly panel.
//!
//! - `types`: re-exported data model and error type from `macropanel-types`.
//! - `source`: the `SeriesSource` trait loaders implement.
//! - `timeseries`: date normalization, quarterly interpolation, outer merge,
//!   anchor range filtering, derived change features, and cadence inference.
//!
//! Every transform is synchronous and pure: it consumes its input and returns
//! new data. Enable the `tracing` feature to get spans on each stage.
#![warn(missing_docs)]

/// Loader trait shared by file readers and fixtures.
pub mod source;
/// Series and panel transforms.
pub mod timeseries;
pub mod types;

pub use source::SeriesSource;
pub use timeseries::features::{annualized, derive_feature, diff, pct_change};
pub use timeseries::infer::{estimate_step_months, infer_frequency, verify_frequency};
pub use timeseries::interpolate::interpolate_quarterly;
pub use timeseries::merge::{merge, merge_pairs};
pub use timeseries::normalize::{normalize_date, normalize_series};
pub use timeseries::range::{filter_from_anchor, first_valid_date};
pub use types::*;
