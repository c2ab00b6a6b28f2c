//! Console summaries printed after each stage.

use urlfeat_core::label::LabelStats;
use urlfeat_core::matrix::FeatureMatrix;
use urlfeat_core::normalize::CleaningStats;
use urlfeat_core::tokenize::TokenStats;

pub fn print_cleaning(stats: &CleaningStats) {
    println!("Cleaning:");
    println!("  Initial: {:>10}", stats.initial);
    println!("  Final:   {:>10}", stats.final_count);
    println!(
        "  Removed: {:>10} ({:.2}%)  missing={} empty={} duplicates={}",
        stats.removed(),
        stats.removed_pct(),
        stats.missing,
        stats.empty,
        stats.duplicates
    );
}

pub fn print_labels(stats: &LabelStats) {
    println!("Binary labels:");
    println!("  Benign (0):    {:>10} ({:.2}%)", stats.benign, stats.benign_pct());
    println!(
        "  Malicious (1): {:>10} ({:.2}%)",
        stats.malicious,
        stats.malicious_pct()
    );
}

pub fn print_tokens(stats: &TokenStats) {
    println!("Tokenization:");
    println!("  Parsed:       {:>10}", stats.parsed);
    println!("  parse_failed: {:>10}", stats.failed);
}

pub fn print_matrix(matrix: &FeatureMatrix) {
    let (rows, cols) = matrix.shape();
    println!("Feature matrix: {} x {}", rows, cols);
    println!(
        "  {:<20}  {:>10}  {:>12}  {:>10}  {:>10}",
        "Column", "Count", "Mean", "Min", "Max"
    );
    println!(
        "  {}  {}  {}  {}  {}",
        "--------------------", "----------", "------------", "----------", "----------"
    );
    for s in matrix.summary() {
        println!(
            "  {:<20}  {:>10}  {:>12.4}  {:>10.4}  {:>10.4}",
            s.name, s.count, s.mean, s.min, s.max
        );
    }
}
