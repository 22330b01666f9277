use crate::{PanelError, RawSeries};

/// A loader that hands raw series to the pipeline by key.
///
/// Implementations own their storage details (files, fixtures, remote
/// endpoints). The pipeline routes each key to the first registered source
/// whose [`provides`](SeriesSource::provides) returns true and calls
/// [`load`](SeriesSource::load) from worker threads, hence `Send + Sync`.
pub trait SeriesSource: Send + Sync {
    /// Stable identifier used in logs and `PanelError::Source`.
    fn name(&self) -> &'static str;

    /// Whether this source can load `key`.
    fn provides(&self, key: &str) -> bool;

    /// Load the raw series registered under `key`.
    ///
    /// # Errors
    /// - `PanelError::NotFound` if the key is unknown to this source.
    /// - `PanelError::Source` for I/O or parse failures.
    fn load(&self, key: &str) -> Result<RawSeries, PanelError>;
}
