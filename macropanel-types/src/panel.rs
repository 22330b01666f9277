//! Wide, date-keyed table produced by the merge step.

use std::collections::HashSet;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::{CanonicalDate, PanelError};

/// One named panel column; `values[i]` belongs to the panel's `i`-th date.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    /// Create a column from its name and per-row values.
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-row values.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of non-null values.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Wide table keyed by canonical monthly date.
///
/// Invariants, checked by [`Panel::new`]:
/// - dates are strictly increasing;
/// - every column has exactly one value per date;
/// - column names are unique.
///
/// Columns are never added or removed after construction; only rows may be
/// narrowed via [`Panel::truncate_before`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    dates: Vec<CanonicalDate>,
    columns: Vec<Column>,
}

impl Panel {
    /// Validate and build a panel.
    ///
    /// # Errors
    /// - `PanelError::UnsortedDates` / `PanelError::DuplicateDate` for bad row keys.
    /// - `PanelError::RaggedColumn` if a column length differs from the row count.
    /// - `PanelError::DuplicateColumn` if two columns share a name.
    pub fn new(dates: Vec<CanonicalDate>, columns: Vec<Column>) -> Result<Self, PanelError> {
        for pair in dates.windows(2) {
            if pair[1] == pair[0] {
                return Err(PanelError::DuplicateDate {
                    series: "panel".into(),
                    date: pair[1].to_string(),
                });
            }
            if pair[1] < pair[0] {
                return Err(PanelError::UnsortedDates {
                    series: "panel".into(),
                    date: pair[1].to_string(),
                });
            }
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(columns.len());
        for c in &columns {
            if c.values.len() != dates.len() {
                return Err(PanelError::RaggedColumn {
                    column: c.name.clone(),
                    expected: dates.len(),
                    found: c.values.len(),
                });
            }
            if !seen.insert(c.name.as_str()) {
                return Err(PanelError::DuplicateColumn {
                    column: c.name.clone(),
                });
            }
        }
        Ok(Self { dates, columns })
    }

    /// Row keys in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[CanonicalDate] {
        &self.dates
    }

    /// Columns in merge input order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.dates.len()
    }

    /// Number of value columns (the date key is not counted).
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// True when the panel has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Row index of `date`, if present.
    #[must_use]
    pub fn row_index(&self, date: CanonicalDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    /// Cell lookup. Returns `None` for a missing row, a missing column, or a null cell.
    #[must_use]
    pub fn value(&self, date: CanonicalDate, column: &str) -> Option<f64> {
        let i = self.row_index(date)?;
        self.column(column).and_then(|c| c.values[i])
    }

    /// Iterate rows as `(date, values-in-column-order)`.
    pub fn rows(&self) -> impl Iterator<Item = (CanonicalDate, Vec<Option<f64>>)> + '_ {
        self.dates
            .iter()
            .enumerate()
            .map(|(i, d)| (*d, self.columns.iter().map(|c| c.values[i]).collect()))
    }

    /// Drop every row dated before `start`; the column set is unchanged.
    #[must_use]
    pub fn truncate_before(self, start: CanonicalDate) -> Self {
        let cut = self.dates.partition_point(|d| *d < start);
        if cut == 0 {
            return self;
        }
        let dates = self.dates[cut..].to_vec();
        let columns = self
            .columns
            .into_iter()
            .map(|mut c| {
                c.values.drain(..cut);
                c
            })
            .collect();
        Self { dates, columns }
    }

    /// Convert into a polars `DataFrame` with a leading `date` column (ISO strings).
    ///
    /// # Errors
    /// Propagates polars construction errors.
    #[cfg(feature = "dataframe")]
    pub fn to_dataframe(&self) -> polars::prelude::PolarsResult<polars::prelude::DataFrame> {
        use polars::prelude::{Column as PlColumn, DataFrame, NamedFrom};

        let mut cols: Vec<PlColumn> = Vec::with_capacity(self.columns.len() + 1);
        let dates: Vec<String> = self.dates.iter().map(ToString::to_string).collect();
        cols.push(PlColumn::new("date".into(), dates));
        for c in &self.columns {
            cols.push(PlColumn::new(c.name.as_str().into(), c.values.clone()));
        }
        DataFrame::new(cols)
    }
}

struct RowRef<'a> {
    panel: &'a Panel,
    index: usize,
}

impl Serialize for RowRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.panel.columns.len() + 1))?;
        map.serialize_entry("date", &self.panel.dates[self.index])?;
        for c in &self.panel.columns {
            map.serialize_entry(c.name.as_str(), &c.values[self.index])?;
        }
        map.end()
    }
}

/// Serializes row-oriented: `[{"date": "2020-01-01", "<column>": value|null, ...}, ...]`.
impl Serialize for Panel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.dates.len()))?;
        for index in 0..self.dates.len() {
            seq.serialize_element(&RowRef { panel: self, index })?;
        }
        seq.end()
    }
}
