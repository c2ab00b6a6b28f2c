//! Feature matrix: ten feature columns plus a trailing binary `label`.

mod build;
mod summary;

use anyhow::Result;
use std::path::Path;

use crate::dataset::Dataset;
use crate::features::{FeatureValue, FeatureVector, FEATURE_NAMES};
use crate::label::BinaryLabel;

pub use build::build_feature_matrix;
pub use summary::ColumnSummary;

/// Name of the trailing target column.
pub const LABEL_COLUMN: &str = "label";

/// Number of columns in every matrix (features + label).
pub const COLUMN_COUNT: usize = FEATURE_NAMES.len() + 1;

/// Validated matrix: no missing cells, one row per input record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<FeatureVector>,
    labels: Vec<BinaryLabel>,
}

impl FeatureMatrix {
    pub(crate) fn new(rows: Vec<FeatureVector>, labels: Vec<BinaryLabel>) -> Self {
        debug_assert_eq!(rows.len(), labels.len());
        Self { rows, labels }
    }

    /// Column names: features in order, then `label`.
    pub fn columns() -> [&'static str; COLUMN_COUNT] {
        let mut out = [LABEL_COLUMN; COLUMN_COUNT];
        out[..FEATURE_NAMES.len()].copy_from_slice(&FEATURE_NAMES);
        out
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), COLUMN_COUNT)
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    pub fn labels(&self) -> &[BinaryLabel] {
        &self.labels
    }

    /// Numeric view of one column by name, or `None` if no such column.
    pub fn column_values(&self, name: &str) -> Option<Vec<f64>> {
        if name == LABEL_COLUMN {
            return Some(self.labels.iter().map(|l| l.as_u8() as f64).collect());
        }
        let idx = FEATURE_NAMES.iter().position(|n| *n == name)?;
        Some(self.rows.iter().map(|r| r.values()[idx].as_f64()).collect())
    }

    /// Per-column count/mean/min/max.
    pub fn summary(&self) -> Vec<ColumnSummary> {
        Self::columns()
            .iter()
            .filter_map(|name| {
                self.column_values(name)
                    .map(|values| ColumnSummary::from_values(name, &values))
            })
            .collect()
    }

    /// String table form, ready for CSV export.
    pub fn to_dataset(&self) -> Dataset {
        let mut ds = Dataset::new(Self::columns());
        for (row, label) in self.rows.iter().zip(&self.labels) {
            let mut cells: Vec<Option<String>> = row
                .values()
                .iter()
                .map(|v: &FeatureValue| Some(v.to_string()))
                .collect();
            cells.push(Some(label.as_u8().to_string()));
            ds.push_row(cells);
        }
        ds
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        self.to_dataset().write_csv(path)
    }
}
