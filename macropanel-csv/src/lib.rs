//! macropanel-csv
//!
//! File-backed collaborators for the macropanel pipeline:
//! - [`CsvSource`] implements `SeriesSource` over CSV files under `DataPaths::raw_dir`.
//! - [`PanelWriter`] exports a finished panel as CSV and row-oriented JSON under
//!   `DataPaths::processed_dir`, optionally copying the JSON to a publish directory.
#![warn(missing_docs)]

mod reader;
mod writer;

pub use reader::{CsvLayout, CsvSource};
pub use writer::{MERGED_CSV, OUTPUT_JSON, PanelWriter};

use std::path::Path;

use macropanel_core::PanelError;

pub(crate) const NAME: &str = "macropanel-csv";

pub(crate) fn io_error(path: &Path, err: impl std::fmt::Display) -> PanelError {
    PanelError::source(NAME, format!("{}: {err}", path.display()))
}
