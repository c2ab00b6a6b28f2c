//! Descriptive statistics per matrix column.

/// Count, mean, min and max of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarizes `values`; an empty column reports zeros.
    pub fn from_values(name: &str, values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                name: name.to_string(),
                count: 0,
                mean: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }
        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            name: name.to_string(),
            count: values.len(),
            mean: sum / values.len() as f64,
            min,
            max,
        }
    }
}
