use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use macropanel_core::{DataPaths, Panel, PanelError};

use crate::io_error;

/// File name of the merged CSV written by [`PanelWriter::publish`].
pub const MERGED_CSV: &str = "merged.csv";
/// File name of the row-oriented JSON written by [`PanelWriter::publish`].
pub const OUTPUT_JSON: &str = "output.json";

/// Writes finished panels under `DataPaths::processed_dir`.
#[derive(Debug, Clone)]
pub struct PanelWriter {
    paths: DataPaths,
}

impl PanelWriter {
    /// Writer bound to `paths`.
    #[must_use]
    pub const fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Write `panel` as CSV: a `date` column then one column per panel column,
    /// empty cells for nulls. Returns the path written.
    ///
    /// # Errors
    /// Returns `PanelError::Source` on any I/O failure.
    pub fn write_csv(&self, panel: &Panel, file: impl AsRef<Path>) -> Result<PathBuf, PanelError> {
        let path = self.prepare(file.as_ref())?;
        let mut writer = csv::Writer::from_path(&path).map_err(|e| io_error(&path, e))?;

        let header = std::iter::once("date").chain(panel.column_names());
        writer.write_record(header).map_err(|e| io_error(&path, e))?;
        for (date, values) in panel.rows() {
            let record = std::iter::once(date.to_string())
                .chain(values.iter().map(|v| v.map(|v| v.to_string()).unwrap_or_default()));
            writer.write_record(record).map_err(|e| io_error(&path, e))?;
        }
        writer.flush().map_err(|e| io_error(&path, e))?;
        Ok(path)
    }

    /// Write `panel` as a JSON array of row objects, `date` first and `null` for
    /// missing values. Returns the path written.
    ///
    /// # Errors
    /// Returns `PanelError::Source` on any I/O or serialization failure.
    pub fn write_json(&self, panel: &Panel, file: impl AsRef<Path>) -> Result<PathBuf, PanelError> {
        let path = self.prepare(file.as_ref())?;
        let handle = File::create(&path).map_err(|e| io_error(&path, e))?;
        let mut out = BufWriter::new(handle);
        serde_json::to_writer_pretty(&mut out, panel).map_err(|e| io_error(&path, e))?;
        out.flush().map_err(|e| io_error(&path, e))?;
        Ok(path)
    }

    /// Write `merged.csv` and `output.json` to `processed_dir` and copy
    /// `output.json` into `publish_dir` when one is configured.
    ///
    /// Returns every path written, in that order.
    ///
    /// # Errors
    /// Returns `PanelError::Source` on any I/O failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "macropanel_csv::publish",
            skip(self, panel),
            fields(rows = panel.height(), columns = panel.width()),
            err,
        )
    )]
    pub fn publish(&self, panel: &Panel) -> Result<Vec<PathBuf>, PanelError> {
        let mut written = vec![
            self.write_csv(panel, MERGED_CSV)?,
            self.write_json(panel, OUTPUT_JSON)?,
        ];
        if let Some(dir) = &self.paths.publish_dir {
            fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
            let target = dir.join(OUTPUT_JSON);
            fs::copy(&written[1], &target).map_err(|e| io_error(&target, e))?;
            written.push(target);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(files = written.len(), "published panel");

        Ok(written)
    }

    fn prepare(&self, file: &Path) -> Result<PathBuf, PanelError> {
        let path = self.paths.processed(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        Ok(path)
    }
}
