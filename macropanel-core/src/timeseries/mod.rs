//! Series transforms, in pipeline order:
//! - `normalize`: raw date encodings to canonical month keys
//! - `infer`: cadence estimation and declared-frequency checks
//! - `interpolate`: quarterly to monthly, linear, no extrapolation
//! - `features`: calendar-lag change columns
//! - `merge`: outer join of monthly series into a panel
//! - `range`: drop rows before the anchor column's first value
/// Derived change columns (percent change, difference, annualized rate).
pub mod features;
/// Cadence inference from observed dates.
pub mod infer;
/// Quarterly to monthly upsampling.
pub mod interpolate;
/// Outer join of series into a panel.
pub mod merge;
/// Date canonicalization.
pub mod normalize;
/// Anchor-based row filtering.
pub mod range;
