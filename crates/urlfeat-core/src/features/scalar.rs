//! Per-URL feature functions. Each takes an already trimmed, lower-cased string.

use super::{shannon_entropy, FeatureExtractor, FeatureVector, SPECIAL_CHARS};
use crate::normalize::normalize_url;

/// Extracts features one URL at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarExtractor;

impl ScalarExtractor {
    /// All ten features of one URL (normalized first).
    pub fn features(url: &str) -> FeatureVector {
        let s = normalize_url(url);
        let digits = digit_count(&s);
        let len = url_length(&s);
        FeatureVector {
            url_length: len,
            domain_length: domain_length(&s),
            path_length: path_length(&s),
            digit_count: digits,
            letter_count: letter_count(&s),
            special_char_count: special_char_count(&s),
            digit_ratio: ratio(digits, len),
            dot_count: dot_count(&s),
            slash_count: slash_count(&s),
            entropy: shannon_entropy(&s),
        }
    }
}

impl FeatureExtractor for ScalarExtractor {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn extract_batch(&self, urls: &[&str]) -> Vec<FeatureVector> {
        urls.iter().map(|u| Self::features(u)).collect()
    }

    fn extract(&self, url: &str) -> FeatureVector {
        Self::features(url)
    }
}

pub fn url_length(s: &str) -> usize {
    s.chars().count()
}

/// Strips a leading `scheme://` where scheme is `[a-z][a-z0-9+.-]*`.
fn strip_scheme(s: &str) -> &str {
    if let Some(colon) = s.find(':') {
        let (scheme, tail) = s.split_at(colon);
        if tail.starts_with("://") && is_scheme(scheme) {
            return &tail[3..];
        }
    }
    s
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}

/// Drops a trailing `:<digits>`; `[::1]:8080` becomes `[::1]`.
fn strip_port(s: &str) -> &str {
    match s.rfind(':') {
        Some(i) if i + 1 < s.len() && s[i + 1..].bytes().all(|b| b.is_ascii_digit()) => &s[..i],
        _ => s,
    }
}

/// Approximate host: after the scheme, up to the first `/`, without
/// `userinfo@` (through the last `@`) and without a numeric `:port`.
pub fn authority(s: &str) -> &str {
    let rest = strip_scheme(s);
    let head = match rest.find('/') {
        Some(i) => &rest[..i],
        None => rest,
    };
    let host = match head.rfind('@') {
        Some(i) => &head[i + 1..],
        None => head,
    };
    strip_port(host)
}

/// Text from the first `/` after the scheme, cut at the first `?` or `#`.
pub fn path(s: &str) -> &str {
    let rest = strip_scheme(s);
    let Some(start) = rest.find('/') else {
        return "";
    };
    let tail = &rest[start..];
    match tail.find(|c: char| c == '?' || c == '#') {
        Some(end) => &tail[..end],
        None => tail,
    }
}

pub fn domain_length(s: &str) -> usize {
    authority(s).chars().count()
}

pub fn path_length(s: &str) -> usize {
    path(s).chars().count()
}

pub fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn letter_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_alphabetic()).count()
}

pub fn special_char_count(s: &str) -> usize {
    s.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count()
}

pub fn digit_ratio(s: &str) -> f64 {
    ratio(digit_count(s), url_length(s))
}

pub(super) fn ratio(digits: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        digits as f64 / len as f64
    }
}

pub fn dot_count(s: &str) -> usize {
    s.chars().filter(|&c| c == '.').count()
}

pub fn slash_count(s: &str) -> usize {
    s.chars().filter(|&c| c == '/').count()
}
