//! Builds and validates a [`FeatureMatrix`] from a table.

use crate::dataset::Dataset;
use crate::error::{MissingReport, PipelineError};
use crate::features::{FeatureExtractor, FeatureVector, FEATURE_NAMES};
use crate::label::BinaryLabel;

use super::{FeatureMatrix, LABEL_COLUMN};

/// Integer value of a label cell: `1`, or an integral float such as `1.0`.
fn label_int(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok()?;
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

/// Parses one non-empty label cell as a binary integer.
fn parse_label(row: usize, raw: &str) -> Result<BinaryLabel, PipelineError> {
    label_int(raw.trim())
        .and_then(BinaryLabel::from_int)
        .ok_or_else(|| PipelineError::InvalidLabel {
            row,
            value: raw.to_string(),
        })
}

/// Counts missing cells per output column. A missing URL leaves every
/// feature cell of its row missing; non-finite floats are missing too.
fn missing_report(features: &[Option<FeatureVector>], labels: &[Option<BinaryLabel>]) -> MissingReport {
    let mut counts = [0usize; FEATURE_NAMES.len()];
    for row in features {
        match row {
            None => counts.iter_mut().for_each(|c| *c += 1),
            Some(v) => {
                for (count, value) in counts.iter_mut().zip(v.values()) {
                    if value.is_missing() {
                        *count += 1;
                    }
                }
            }
        }
    }
    let label_missing = labels.iter().filter(|l| l.is_none()).count();

    MissingReport::from_counts(
        FEATURE_NAMES
            .iter()
            .zip(counts)
            .map(|(name, n)| (name.to_string(), n))
            .chain(std::iter::once((LABEL_COLUMN.to_string(), label_missing))),
    )
}

/// Runs `extractor` over `url_column` and joins the integer `label_column`.
///
/// Both columns are looked up before any work is done. Fails on an absent
/// column, a label that is not 0 or 1, or any missing cell in the result.
pub fn build_feature_matrix(
    dataset: &Dataset,
    url_column: &str,
    label_column: &str,
    extractor: &dyn FeatureExtractor,
) -> Result<FeatureMatrix, PipelineError> {
    let url_idx = dataset.column_index(url_column)?;
    let label_idx = dataset.column_index(label_column)?;

    let mut labels: Vec<Option<BinaryLabel>> = Vec::with_capacity(dataset.len());
    for (row, cell) in dataset.column_at(label_idx).into_iter().enumerate() {
        let label = match cell {
            Some(raw) if !raw.trim().is_empty() => Some(parse_label(row, raw)?),
            _ => None,
        };
        labels.push(label);
    }

    let urls = dataset.column_at(url_idx);
    let present: Vec<&str> = urls.iter().flatten().copied().collect();
    tracing::info!(
        rows = urls.len(),
        strategy = extractor.name(),
        "extracting lexical features"
    );
    let mut extracted = extractor.extract_batch(&present).into_iter();
    let features: Vec<Option<FeatureVector>> = urls
        .iter()
        .map(|u| u.and_then(|_| extracted.next()))
        .collect();

    let report = missing_report(&features, &labels);
    if !report.is_empty() {
        tracing::warn!(missing = report.total(), "feature matrix validation failed: {}", report);
        return Err(PipelineError::MissingValues(report));
    }

    let rows: Vec<FeatureVector> = features.into_iter().flatten().collect();
    let labels: Vec<BinaryLabel> = labels.into_iter().flatten().collect();
    let matrix = FeatureMatrix::new(rows, labels);
    let (n_rows, n_cols) = matrix.shape();
    tracing::info!(rows = n_rows, columns = n_cols, "feature matrix built");
    Ok(matrix)
}
