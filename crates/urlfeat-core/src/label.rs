//! Binary target derivation: `benign` → 0, every other class → 1.

use crate::normalize::NormalizedRecord;

/// Two-class training target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryLabel {
    Benign,
    Malicious,
}

impl BinaryLabel {
    /// Maps a class label to its binary target. Total: any string that is not
    /// `benign` (after trim and lower-case) is malicious.
    pub fn from_type(kind: &str) -> Self {
        if kind.trim().to_lowercase() == "benign" {
            BinaryLabel::Benign
        } else {
            BinaryLabel::Malicious
        }
    }

    /// Parses an already-binary integer label.
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(BinaryLabel::Benign),
            1 => Some(BinaryLabel::Malicious),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            BinaryLabel::Benign => 0,
            BinaryLabel::Malicious => 1,
        }
    }
}

/// Benign/malicious counts from a binarization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStats {
    pub benign: usize,
    pub malicious: usize,
}

impl LabelStats {
    pub fn total(&self) -> usize {
        self.benign + self.malicious
    }

    pub fn benign_pct(&self) -> f64 {
        pct(self.benign, self.total())
    }

    pub fn malicious_pct(&self) -> f64 {
        pct(self.malicious, self.total())
    }

    pub fn record(&mut self, label: BinaryLabel) {
        match label {
            BinaryLabel::Benign => self.benign += 1,
            BinaryLabel::Malicious => self.malicious += 1,
        }
    }
}

fn pct(n: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        n as f64 / total as f64 * 100.0
    }
}

/// Binarizes the `kind` of every record, index-aligned with the input.
/// A missing kind is treated as the empty string (malicious).
pub fn binarize_records(records: &[NormalizedRecord]) -> (Vec<BinaryLabel>, LabelStats) {
    let mut stats = LabelStats::default();
    let labels: Vec<BinaryLabel> = records
        .iter()
        .map(|r| {
            let label = BinaryLabel::from_type(r.kind.as_deref().unwrap_or(""));
            stats.record(label);
            label
        })
        .collect();

    tracing::info!(
        benign = stats.benign,
        malicious = stats.malicious,
        "binary labels: benign {:.2}%, malicious {:.2}%",
        stats.benign_pct(),
        stats.malicious_pct()
    );
    (labels, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: Option<&str>) -> NormalizedRecord {
        NormalizedRecord {
            url: "example.com".to_string(),
            kind: kind.map(str::to_string),
        }
    }

    #[test]
    fn benign_is_zero_everything_else_one() {
        assert_eq!(BinaryLabel::from_type("Benign").as_u8(), 0);
        assert_eq!(BinaryLabel::from_type("  BENIGN ").as_u8(), 0);
        assert_eq!(BinaryLabel::from_type("Phishing").as_u8(), 1);
        assert_eq!(BinaryLabel::from_type("malware").as_u8(), 1);
        assert_eq!(BinaryLabel::from_type("defacement").as_u8(), 1);
        assert_eq!(BinaryLabel::from_type("").as_u8(), 1);
        assert_eq!(BinaryLabel::from_type("benign-ish").as_u8(), 1);
    }

    #[test]
    fn from_int_accepts_only_zero_and_one() {
        assert_eq!(BinaryLabel::from_int(0), Some(BinaryLabel::Benign));
        assert_eq!(BinaryLabel::from_int(1), Some(BinaryLabel::Malicious));
        assert_eq!(BinaryLabel::from_int(2), None);
        assert_eq!(BinaryLabel::from_int(-1), None);
    }

    #[test]
    fn binarize_counts() {
        let records = vec![
            rec(Some("benign")),
            rec(Some("phishing")),
            rec(None),
            rec(Some("Benign")),
        ];
        let (labels, stats) = binarize_records(&records);
        let bits: Vec<u8> = labels.iter().map(|l| l.as_u8()).collect();
        assert_eq!(bits, vec![0, 1, 1, 0]);
        assert_eq!(stats.benign, 2);
        assert_eq!(stats.malicious, 2);
        assert!((stats.benign_pct() - 50.0).abs() < 1e-9);
    }
}
