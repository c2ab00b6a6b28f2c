//! Lexical feature extraction: one fixed 10-field vector per URL.
//!
//! Two strategies implement [`FeatureExtractor`]:
//! - [`VectorizedExtractor`] computes each feature as one pass over the whole
//!   column (regex transforms for authority and path), then entropy per row.
//! - [`ScalarExtractor`] computes all features for one URL at a time with
//!   plain string operations.
//!
//! Both trim and lower-case their input first and must agree on every row.
//! The authority/path split here is a string-only approximation and is
//! independent of [`crate::tokenize`].

mod entropy;
mod scalar;
mod vectorized;

use serde::Serialize;
use std::fmt;

use crate::config::Strategy;

pub use entropy::shannon_entropy;
pub use scalar::{
    authority, digit_count, digit_ratio, domain_length, dot_count, letter_count, path,
    path_length, slash_count, special_char_count, url_length, ScalarExtractor,
};
pub use vectorized::VectorizedExtractor;

/// Characters counted by `special_char_count`. `.` and `/` are also counted
/// by `dot_count` and `slash_count`.
pub const SPECIAL_CHARS: &str = "-_.~:/?#[]@!$&'()*+,;=%";

/// Feature column names, in matrix order.
pub const FEATURE_NAMES: [&str; 10] = [
    "url_length",
    "domain_length",
    "path_length",
    "digit_count",
    "letter_count",
    "special_char_count",
    "digit_ratio",
    "dot_count",
    "slash_count",
    "entropy",
];

/// Lexical statistics of one URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    pub url_length: usize,
    pub domain_length: usize,
    pub path_length: usize,
    pub digit_count: usize,
    pub letter_count: usize,
    pub special_char_count: usize,
    pub digit_ratio: f64,
    pub dot_count: usize,
    pub slash_count: usize,
    pub entropy: f64,
}

/// A single matrix cell: counts are integers, ratio and entropy are floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Int(u64),
    Float(f64),
}

impl FeatureValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FeatureValue::Int(v) => v as f64,
            FeatureValue::Float(v) => v,
        }
    }

    /// Non-finite floats count as missing values.
    pub fn is_missing(self) -> bool {
        match self {
            FeatureValue::Int(_) => false,
            FeatureValue::Float(v) => !v.is_finite(),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Int(v) => write!(f, "{}", v),
            // Debug keeps the decimal point on integral floats ("0.0", "1.0").
            FeatureValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl FeatureVector {
    /// Cell values in [`FEATURE_NAMES`] order.
    pub fn values(&self) -> [FeatureValue; 10] {
        use FeatureValue::{Float, Int};
        [
            Int(self.url_length as u64),
            Int(self.domain_length as u64),
            Int(self.path_length as u64),
            Int(self.digit_count as u64),
            Int(self.letter_count as u64),
            Int(self.special_char_count as u64),
            Float(self.digit_ratio),
            Int(self.dot_count as u64),
            Int(self.slash_count as u64),
            Float(self.entropy),
        ]
    }
}

/// Strategy interface shared by the scalar and vectorized extractors.
pub trait FeatureExtractor {
    fn name(&self) -> &'static str;

    /// Extracts one vector per input, index-aligned. Inputs need not be normalized.
    fn extract_batch(&self, urls: &[&str]) -> Vec<FeatureVector>;

    fn extract(&self, url: &str) -> FeatureVector {
        self.extract_batch(&[url])
            .pop()
            .unwrap_or_default()
    }
}

/// Returns the extractor for a configured strategy.
pub fn extractor_for(strategy: Strategy) -> Box<dyn FeatureExtractor> {
    match strategy {
        Strategy::Vectorized => Box::new(VectorizedExtractor::new()),
        Strategy::Scalar => Box::new(ScalarExtractor),
    }
}

#[cfg(test)]
mod tests;
