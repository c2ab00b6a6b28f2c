//! CSV reading and writing for [`Dataset`].

use anyhow::{Context, Result};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use super::Dataset;

impl Dataset {
    /// Reads a headered CSV file. Empty fields become missing cells.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .with_context(|| format!("open input csv: {}", path.display()))?;
        let ds = Self::from_reader(file)
            .with_context(|| format!("read input csv: {}", path.display()))?;
        tracing::info!(
            rows = ds.len(),
            columns = ds.columns().len(),
            "loaded {}",
            path.display()
        );
        Ok(ds)
    }

    /// Reads headered CSV from any reader. Ragged rows are allowed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = rdr.headers().context("csv header row")?.clone();
        let mut ds = Dataset::new(headers.iter());
        for (i, record) in rdr.records().enumerate() {
            let record = record.with_context(|| format!("csv record {}", i + 1))?;
            let row = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();
            ds.push_row(row);
        }
        Ok(ds)
    }

    /// Writes the table as headered CSV, creating parent directories.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir: {}", parent.display()))?;
            }
        }
        let file = fs::File::create(path)
            .with_context(|| format!("create output csv: {}", path.display()))?;
        self.to_writer(file)?;
        tracing::info!(rows = self.len(), "saved {}", path.display());
        Ok(())
    }

    /// Writes headered CSV to any writer. Missing cells are written empty.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_missing() {
        let data = "url,type\nexample.com,benign\n,phishing\n";
        let ds = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(ds.columns(), ["url".to_string(), "type".to_string()]);
        assert_eq!(ds.column("url").unwrap(), vec![Some("example.com"), None]);
    }

    #[test]
    fn ragged_rows_are_padded() {
        let data = "url,type\nexample.com\n";
        let ds = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(ds.column("type").unwrap(), vec![None]);
    }

    #[test]
    fn writer_quotes_commas() {
        let mut ds = Dataset::new(["url"]);
        ds.push_row(vec![Some("a.com/?x=1,2".to_string())]);
        let mut out = Vec::new();
        ds.to_writer(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "url\n\"a.com/?x=1,2\"\n");
    }
}
