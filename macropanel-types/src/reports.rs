//! Report envelope produced by the pipeline.

use serde::Serialize;

use crate::{CanonicalDate, Column, Panel};

/// Observed span of one panel column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCoverage {
    /// Column name.
    pub column: String,
    /// First row with a value.
    pub first: Option<CanonicalDate>,
    /// Last row with a value.
    pub last: Option<CanonicalDate>,
    /// Count of non-null cells.
    pub observations: usize,
}

impl ColumnCoverage {
    /// Summarize `column` against the panel's row keys.
    #[must_use]
    pub fn of(dates: &[CanonicalDate], column: &Column) -> Self {
        let values = column.values();
        let first = values.iter().position(Option::is_some).map(|i| dates[i]);
        let last = values.iter().rposition(Option::is_some).map(|i| dates[i]);
        Self {
            column: column.name().to_string(),
            first,
            last,
            observations: column.observations(),
        }
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    /// The merged, range-filtered panel.
    pub panel: Panel,
    /// Per-column coverage after filtering, in column order.
    pub coverage: Vec<ColumnCoverage>,
    /// First row kept by the anchor filter, when one was configured.
    pub anchor_start: Option<CanonicalDate>,
}

impl PanelReport {
    /// Build the report, computing coverage from the panel.
    #[must_use]
    pub fn new(panel: Panel, anchor_start: Option<CanonicalDate>) -> Self {
        let coverage = panel
            .columns()
            .iter()
            .map(|c| ColumnCoverage::of(panel.dates(), c))
            .collect();
        Self {
            panel,
            coverage,
            anchor_start,
        }
    }
}
