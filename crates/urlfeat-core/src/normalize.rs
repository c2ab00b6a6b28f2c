//! URL cleaning: drop missing, trim, lower-case, drop empty, deduplicate.

use std::collections::HashSet;

/// Raw input unit: one URL and its class label as read from the source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub url: Option<String>,
    /// Class label (`type` column), or an already-binary label cell.
    pub kind: Option<String>,
}

impl Record {
    pub fn new(url: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            kind: Some(kind.into()),
        }
    }
}

/// Record whose URL is trimmed, lower-cased and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub url: String,
    pub kind: Option<String>,
}

/// Counts reported by a cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub initial: usize,
    pub missing: usize,
    pub empty: usize,
    pub duplicates: usize,
    pub final_count: usize,
}

impl CleaningStats {
    pub fn removed(&self) -> usize {
        self.initial - self.final_count
    }

    /// Share of input rows removed, in percent (0.0 for an empty input).
    pub fn removed_pct(&self) -> f64 {
        if self.initial == 0 {
            0.0
        } else {
            self.removed() as f64 / self.initial as f64 * 100.0
        }
    }
}

/// Trim and lower-case one URL string.
pub fn normalize_url(url: &str) -> String {
    url.trim().to_lowercase()
}

/// Cleans a batch of records. The first occurrence of each URL is kept and
/// input order is preserved.
pub fn normalize_records(records: &[Record]) -> (Vec<NormalizedRecord>, CleaningStats) {
    let mut stats = CleaningStats {
        initial: records.len(),
        ..Default::default()
    };
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut out = Vec::with_capacity(records.len());

    for record in records {
        let Some(raw) = record.url.as_deref() else {
            stats.missing += 1;
            continue;
        };
        let url = normalize_url(raw);
        if url.is_empty() {
            stats.empty += 1;
            continue;
        }
        if !seen.insert(url.clone()) {
            stats.duplicates += 1;
            continue;
        }
        out.push(NormalizedRecord {
            url,
            kind: record.kind.clone(),
        });
    }

    stats.final_count = out.len();
    tracing::info!(
        initial = stats.initial,
        final_count = stats.final_count,
        missing = stats.missing,
        empty = stats.empty,
        duplicates = stats.duplicates,
        "cleaned urls: removed {} ({:.2}%)",
        stats.removed(),
        stats.removed_pct()
    );
    (out, stats)
}
