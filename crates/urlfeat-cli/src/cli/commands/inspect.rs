//! `urlfeat inspect <url>` – tokens and features of one URL.

use anyhow::Result;
use serde::Serialize;
use urlfeat_core::features::{FeatureExtractor, FeatureVector, VectorizedExtractor};
use urlfeat_core::normalize::normalize_url;
use urlfeat_core::tokenize::{tokenize, TokenSet};

#[derive(Debug, Serialize)]
struct Inspection<'a> {
    url: &'a str,
    normalized: String,
    tokens: TokenSet,
    features: FeatureVector,
}

fn inspect(url: &str) -> Inspection<'_> {
    let normalized = normalize_url(url);
    Inspection {
        url,
        tokens: tokenize(&normalized),
        features: VectorizedExtractor::new().extract(url),
        normalized,
    }
}

pub fn run_inspect(url: &str) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&inspect(url))?);
    Ok(())
}
