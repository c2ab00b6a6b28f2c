//! In-memory table exchanged between the outer I/O layer and the pipeline.
//!
//! A [`Dataset`] is a list of column names plus rows of optional string
//! cells. `None` is a missing cell (an empty CSV field, or a field past the
//! end of a short row).

mod io;

use crate::error::PipelineError;

/// Named columns with rows of optional string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Creates an empty table with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding with missing cells or truncating to the column count.
    pub fn push_row(&mut self, mut row: Vec<Option<String>>) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `name`, or a missing-column error listing what exists.
    pub fn column_index(&self, name: &str) -> Result<usize, PipelineError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PipelineError::MissingColumn {
                column: name.to_string(),
                available: self.columns.clone(),
            })
    }

    /// Borrowed view of one column.
    pub fn column(&self, name: &str) -> Result<Vec<Option<&str>>, PipelineError> {
        let idx = self.column_index(name)?;
        Ok(self.column_at(idx))
    }

    pub(crate) fn column_at(&self, idx: usize) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.get(idx).and_then(|c| c.as_deref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn push_row_pads_short_rows() {
        let mut ds = Dataset::new(["url", "type"]);
        ds.push_row(vec![cell("example.com")]);
        assert_eq!(ds.rows()[0], vec![cell("example.com"), None]);
    }

    #[test]
    fn column_lookup() {
        let mut ds = Dataset::new(["url", "type"]);
        ds.push_row(vec![cell("a.com"), cell("benign")]);
        ds.push_row(vec![None, cell("phishing")]);
        assert_eq!(ds.column("url").unwrap(), vec![Some("a.com"), None]);
        assert_eq!(ds.column_index("type").unwrap(), 1);
    }

    #[test]
    fn missing_column_is_an_error() {
        let ds = Dataset::new(["link"]);
        match ds.column("url") {
            Err(PipelineError::MissingColumn { column, available }) => {
                assert_eq!(column, "url");
                assert_eq!(available, vec!["link".to_string()]);
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }
}
