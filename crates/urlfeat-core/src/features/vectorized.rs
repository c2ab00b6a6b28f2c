//! Column-at-a-time feature extraction.
//!
//! Every feature except entropy is one pass over the whole normalized column,
//! with regex transforms standing in for the per-URL string slicing of the
//! scalar path. Results are assembled into rows only at the end.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::scalar::ratio;
use super::{shannon_entropy, FeatureExtractor, FeatureVector};
use crate::normalize::normalize_url;

struct Patterns {
    scheme: Regex,
    head: Regex,
    userinfo: Regex,
    port: Regex,
    path: Regex,
    digit: Regex,
    special: Regex,
}

impl Patterns {
    fn compile() -> Self {
        let re = |p: &str| Regex::new(p).expect("static feature pattern");
        Self {
            scheme: re(r"^[a-z][a-z0-9+.\-]*://"),
            head: re(r"^[^/]*"),
            userinfo: re(r"(?s)^.*@"),
            port: re(r":[0-9]+$"),
            path: re(r"^[^/]*(/[^?#]*)"),
            digit: re(r"[0-9]"),
            special: re(r"[\-_.\~:/?\#\[\]@!$\&'()*+,;=%]"),
        }
    }
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::compile);

/// Struct-of-arrays form of a feature batch.
#[derive(Debug, Default)]
struct FeatureColumns {
    url_length: Vec<usize>,
    domain_length: Vec<usize>,
    path_length: Vec<usize>,
    digit_count: Vec<usize>,
    letter_count: Vec<usize>,
    special_char_count: Vec<usize>,
    digit_ratio: Vec<f64>,
    dot_count: Vec<usize>,
    slash_count: Vec<usize>,
    entropy: Vec<f64>,
}

impl FeatureColumns {
    fn into_rows(self) -> Vec<FeatureVector> {
        (0..self.url_length.len())
            .map(|i| FeatureVector {
                url_length: self.url_length[i],
                domain_length: self.domain_length[i],
                path_length: self.path_length[i],
                digit_count: self.digit_count[i],
                letter_count: self.letter_count[i],
                special_char_count: self.special_char_count[i],
                digit_ratio: self.digit_ratio[i],
                dot_count: self.dot_count[i],
                slash_count: self.slash_count[i],
                entropy: self.entropy[i],
            })
            .collect()
    }
}

/// Batch extractor: one column pass per feature.
#[derive(Clone, Copy)]
pub struct VectorizedExtractor {
    patterns: &'static Patterns,
}

impl Default for VectorizedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VectorizedExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VectorizedExtractor")
    }
}

fn char_len<S: AsRef<str>>(column: &[S]) -> Vec<usize> {
    column.iter().map(|s| s.as_ref().chars().count()).collect()
}

fn count_matches(re: &Regex, column: &[String]) -> Vec<usize> {
    column.iter().map(|s| re.find_iter(s).count()).collect()
}

fn count_byte(column: &[String], needle: u8) -> Vec<usize> {
    column
        .iter()
        .map(|s| s.bytes().filter(|&b| b == needle).count())
        .collect()
}

fn replace_all_rows<'a, S: AsRef<str>>(re: &Regex, column: &'a [S]) -> Vec<Cow<'a, str>> {
    column.iter().map(|s| re.replace(s.as_ref(), "")).collect()
}

impl VectorizedExtractor {
    pub fn new() -> Self {
        Self {
            patterns: &PATTERNS,
        }
    }

    fn columns(&self, urls: &[&str]) -> FeatureColumns {
        let p = self.patterns;
        let column: Vec<String> = urls.iter().map(|u| normalize_url(u)).collect();

        // Authority: drop scheme, keep up to the first '/', drop userinfo, drop port.
        let rest = replace_all_rows(&p.scheme, &column);
        let heads: Vec<&str> = rest
            .iter()
            .map(|s| p.head.find(s).map_or("", |m| m.as_str()))
            .collect();
        let hosts = replace_all_rows(&p.userinfo, &heads);
        let domains = replace_all_rows(&p.port, &hosts);

        let paths: Vec<&str> = rest
            .iter()
            .map(|s| {
                p.path
                    .captures(s)
                    .and_then(|c| c.get(1))
                    .map_or("", |m| m.as_str())
            })
            .collect();

        let url_length = char_len(&column);
        let digit_count = count_matches(&p.digit, &column);
        let digit_ratio = digit_count
            .iter()
            .zip(&url_length)
            .map(|(&d, &len)| ratio(d, len))
            .collect();

        FeatureColumns {
            domain_length: char_len(&domains),
            path_length: char_len(&paths),
            letter_count: column
                .iter()
                .map(|s| s.chars().filter(|c| c.is_alphabetic()).count())
                .collect(),
            special_char_count: count_matches(&p.special, &column),
            dot_count: count_byte(&column, b'.'),
            slash_count: count_byte(&column, b'/'),
            entropy: column.iter().map(|s| shannon_entropy(s)).collect(),
            url_length,
            digit_count,
            digit_ratio,
        }
    }
}

impl FeatureExtractor for VectorizedExtractor {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn extract_batch(&self, urls: &[&str]) -> Vec<FeatureVector> {
        tracing::debug!(rows = urls.len(), "vectorized feature pass");
        self.columns(urls).into_rows()
    }
}
