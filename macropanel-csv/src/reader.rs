use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use macropanel_core::{DataPaths, Frequency, PanelError, RawDate, RawSeries, SeriesSource};

use crate::{NAME, io_error};

/// Cells read as a missing observation rather than a parse failure.
const NULL_MARKERS: &[&str] = &["", ".", "NA", "N/A", "#N/A", "NaN", "nan", "null"];

/// Column layout of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvLayout {
    /// Charting-tool export: `time` in Unix seconds and a `close` column.
    TradingView,
    /// A text date column and one value column.
    Labelled {
        /// Header of the date column (`DATE`, `Date`, ...).
        date_column: String,
        /// Header of the value column; `None` takes the last column.
        value_column: Option<String>,
    },
}

impl CsvLayout {
    /// `Labelled` with the value in the last column, the usual vintage-table shape.
    pub fn labelled(date_column: impl Into<String>) -> Self {
        Self::Labelled {
            date_column: date_column.into(),
            value_column: None,
        }
    }
}

#[derive(Debug, Clone)]
struct CsvFile {
    relative: PathBuf,
    layout: CsvLayout,
}

/// Loads raw series from CSV files registered by key.
///
/// Every series is returned as monthly; the pipeline applies the frequency
/// declared for the key.
#[derive(Debug, Clone)]
pub struct CsvSource {
    paths: DataPaths,
    files: HashMap<String, CsvFile>,
}

impl CsvSource {
    /// A source reading from `paths.raw_dir` with no files registered.
    #[must_use]
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            files: HashMap::new(),
        }
    }

    /// Register `relative` (under `raw_dir`) as the file behind `key`.
    #[must_use]
    pub fn with_file(
        mut self,
        key: impl Into<String>,
        relative: impl Into<PathBuf>,
        layout: CsvLayout,
    ) -> Self {
        self.files.insert(
            key.into(),
            CsvFile {
                relative: relative.into(),
                layout,
            },
        );
        self
    }

    /// Absolute path registered for `key`, if any.
    #[must_use]
    pub fn path_of(&self, key: &str) -> Option<PathBuf> {
        self.files.get(key).map(|f| self.paths.raw(&f.relative))
    }
}

impl SeriesSource for CsvSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn provides(&self, key: &str) -> bool {
        self.files.contains_key(key)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "macropanel_csv::load", skip(self, key), fields(key = %key), err)
    )]
    fn load(&self, key: &str) -> Result<RawSeries, PanelError> {
        let file = self
            .files
            .get(key)
            .ok_or_else(|| PanelError::not_found(format!("csv file for {key}")))?;
        let path = self.paths.raw(&file.relative);
        let series = read_series(&path, &file.layout)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = %key,
            path = %path.display(),
            rows = series.points.len(),
            "loaded csv series"
        );

        Ok(series)
    }
}

fn read_series(path: &Path, layout: &CsvLayout) -> Result<RawSeries, PanelError> {
    let handle = File::open(path).map_err(|e| io_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(handle);
    let headers = reader.headers().map_err(|e| io_error(path, e))?.clone();

    let (date_idx, value_idx) = match layout {
        CsvLayout::TradingView => (
            column_index(path, &headers, "time")?,
            column_index(path, &headers, "close")?,
        ),
        CsvLayout::Labelled {
            date_column,
            value_column,
        } => {
            let date_idx = column_index(path, &headers, date_column)?;
            let value_idx = match value_column {
                Some(col) => column_index(path, &headers, col)?,
                None => headers
                    .len()
                    .checked_sub(1)
                    .filter(|&i| i != date_idx)
                    .ok_or_else(|| io_error(path, "no value column besides the date"))?,
            };
            (date_idx, value_idx)
        }
    };
    let name = headers.get(value_idx).unwrap_or_default().to_string();

    let mut series = RawSeries::new(name, Frequency::Monthly);
    for (idx, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = record.map_err(|e| io_error(path, e))?;
        let date_cell = record.get(date_idx).unwrap_or_default();
        let value_cell = record.get(value_idx).unwrap_or_default();

        let date = match layout {
            CsvLayout::TradingView => RawDate::Timestamp(parse_timestamp(date_cell).ok_or_else(
                || io_error(path, format!("line {line}: bad timestamp {date_cell:?}")),
            )?),
            CsvLayout::Labelled { .. } => RawDate::Text(date_cell.to_string()),
        };
        let value = parse_value(value_cell).map_err(|e| {
            io_error(
                path,
                format!("line {line}: bad number {value_cell:?} in column {}: {e}", series.name),
            )
        })?;
        series.push(date, value);
    }
    Ok(series)
}

fn column_index(path: &Path, headers: &StringRecord, column: &str) -> Result<usize, PanelError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| io_error(path, format!("missing column {column:?}")))
}

// Exports sometimes write seconds as `1580504400.0`.
#[allow(clippy::cast_possible_truncation)]
fn parse_timestamp(cell: &str) -> Option<i64> {
    cell.parse::<i64>().ok().or_else(|| {
        cell.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

// `f64::from_str` also takes `inf`, `NAN` and friends; only finite numbers load.
fn parse_value(cell: &str) -> Result<Option<f64>, String> {
    if NULL_MARKERS.contains(&cell) {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        Ok(_) => Err("not a finite number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
