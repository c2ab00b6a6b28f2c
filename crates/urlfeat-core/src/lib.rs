//! URL normalization, tokenization and lexical feature extraction for
//! benign/malicious URL classifiers.
//!
//! Stages, in pipeline order: [`normalize`] → [`label`] → [`tokenize`] →
//! [`features`] → [`matrix`]. [`pipeline`] wires them together over a
//! [`dataset::Dataset`].

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod label;
pub mod logging;
pub mod matrix;
pub mod normalize;
pub mod pipeline;
pub mod tokenize;

pub use error::PipelineError;
