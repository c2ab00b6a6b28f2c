//! Shannon entropy over the character distribution of a string.

/// Empirical Shannon entropy of `s` in bits (base 2); `0.0` for an empty string.
///
/// Characters are tallied in sorted order so the floating-point sum is the
/// same on every call for the same input.
pub fn shannon_entropy(s: &str) -> f64 {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return 0.0;
    }
    chars.sort_unstable();

    let len = chars.len() as f64;
    let mut entropy = 0.0;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut j = i + 1;
        while j < chars.len() && chars[j] == c {
            j += 1;
        }
        let p = (j - i) as f64 / len;
        entropy -= p * p.log2();
        i = j;
    }
    entropy
}
