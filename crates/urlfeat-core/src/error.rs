//! Error types for the feature pipeline.
//!
//! Schema and validation failures are fatal to a run and surface as
//! [`PipelineError`]. Per-row URL parse failures never reach this type; the
//! tokenizer downgrades them to a flagged empty token set.

use std::fmt;
use thiserror::Error;

/// Fatal pipeline failure. No partial output is produced when one is returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column is absent from the input table.
    #[error("missing required column '{column}' (found: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// A label cell could not be coerced to a binary integer.
    #[error("invalid label at row {row}: '{value}' is not 0 or 1")]
    InvalidLabel { row: usize, value: String },

    /// The built matrix still contains missing values.
    #[error("feature matrix contains missing values: {0}")]
    MissingValues(MissingReport),
}

/// Per-column missing-value counts, ordered greatest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReport {
    pub counts: Vec<(String, usize)>,
}

impl MissingReport {
    /// Builds a report from raw counts, dropping zero entries and sorting by
    /// count (descending), then by column name for ties.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let mut counts: Vec<(String, usize)> = counts.into_iter().filter(|(_, n)| *n > 0).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for MissingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (column, n) in &self.counts {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", column, n)?;
            first = false;
        }
        Ok(())
    }
}
