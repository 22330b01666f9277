//! Configuration types shared by the pipeline and its collaborators.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Frequency;

/// A change column derived from a monthly series before merging.
///
/// Lags are calendar lags: the base value for month `t` is the value at `t - months`,
/// looked up by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    /// Relative change `(x_t - x_{t-k}) / x_{t-k}`.
    PctChange {
        /// Lag `k` in months.
        months: u32,
    },
    /// Absolute change `x_t - x_{t-k}`.
    Diff {
        /// Lag `k` in months.
        months: u32,
    },
    /// Relative change over `k` months scaled to a yearly rate (`* 12 / k`).
    Annualized {
        /// Window `k` in months.
        months: u32,
    },
}

impl Feature {
    /// Lag or window length in months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::PctChange { months } | Self::Diff { months } | Self::Annualized { months } => {
                months
            }
        }
    }

    /// Column stem of the derived series (suffix is appended on merge).
    ///
    /// The six-month annualized rate keeps the bare `annualized_change` name;
    /// other windows carry their length so they can share a series.
    #[must_use]
    pub fn column_name(self) -> String {
        match self {
            Self::PctChange { months: 1 } => "Pct".to_string(),
            Self::PctChange { months } => format!("{months}m_pct_change"),
            Self::Diff { months } => format!("{months}m_change"),
            Self::Annualized { months: 6 } => "annualized_change".to_string(),
            Self::Annualized { months } => format!("{months}m_annualized_change"),
        }
    }

    /// The column set the price-index cleaning step attaches: monthly change,
    /// six-month change, and its annualized rate.
    #[must_use]
    pub const fn inflation_set() -> [Self; 3] {
        [
            Self::PctChange { months: 1 },
            Self::PctChange { months: 6 },
            Self::Annualized { months: 6 },
        ]
    }
}

/// Declares one series the pipeline should load and merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    /// Key understood by a registered source (file key, fixture id, ...).
    pub key: String,
    /// Value column name to use instead of the loaded name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Native cadence; quarterly series are interpolated to monthly.
    #[serde(default)]
    pub frequency: Frequency,
    /// Appended to every column this series contributes.
    #[serde(default)]
    pub suffix: String,
    /// Derived change columns merged right after the base column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl SeriesSpec {
    /// A monthly series with no suffix and no features.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            frequency: Frequency::Monthly,
            suffix: String::new(),
            features: Vec::new(),
        }
    }

    /// Override the value column name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the native cadence.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Shorthand for `frequency(Frequency::Quarterly)`.
    #[must_use]
    pub const fn quarterly(self) -> Self {
        self.frequency(Frequency::Quarterly)
    }

    /// Set the column suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Add a derived feature column.
    #[must_use]
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// Add several derived feature columns.
    #[must_use]
    pub fn features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features);
        self
    }
}

/// Engine-level knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Column whose first observation sets the panel's first row. `None` keeps all rows.
    pub anchor: Option<String>,
    /// Reject series whose observed date spacing disagrees with the declared frequency.
    pub verify_frequency: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            anchor: None,
            verify_frequency: true,
        }
    }
}

/// Filesystem layout handed to loaders and exporters.
///
/// The engine itself never sees paths; only collaborators do, and always through
/// a value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Directory holding raw source files.
    pub raw_dir: PathBuf,
    /// Directory receiving intermediate and merged outputs.
    pub processed_dir: PathBuf,
    /// Optional directory receiving the published JSON copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_dir: Option<PathBuf>,
}

impl DataPaths {
    /// `root/raw` and `root/processed`, nothing published.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            raw_dir: root.join("raw"),
            processed_dir: root.join("processed"),
            publish_dir: None,
        }
    }

    /// Also copy published outputs into `dir`.
    #[must_use]
    pub fn with_publish_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.publish_dir = Some(dir.into());
        self
    }

    /// Resolve a path relative to `raw_dir`.
    #[must_use]
    pub fn raw(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.raw_dir.join(relative)
    }

    /// Resolve a path relative to `processed_dir`.
    #[must_use]
    pub fn processed(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.processed_dir.join(relative)
    }
}

/// A whole pipeline declared as data, e.g. loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineManifest {
    /// Where collaborators read and write.
    pub paths: DataPaths,
    /// Engine knobs.
    #[serde(default)]
    pub panel: PanelConfig,
    /// Series in merge order.
    pub series: Vec<SeriesSpec>,
}
