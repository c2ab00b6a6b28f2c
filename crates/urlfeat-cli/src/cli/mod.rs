//! CLI for the urlfeat URL feature pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use urlfeat_core::config::{self, Strategy, UrlfeatConfig};

use commands::{run_clean, run_features, run_inspect, run_pipeline};

/// Top-level CLI for urlfeat.
#[derive(Debug, Parser)]
#[command(name = "urlfeat")]
#[command(about = "urlfeat: lexical feature matrices from labeled URL lists", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlfeat/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Extraction strategy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Vectorized,
    Scalar,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Vectorized => Strategy::Vectorized,
            StrategyArg::Scalar => Strategy::Scalar,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Clean raw URLs, binarize labels, tokenize, and write the processed table.
    Clean {
        /// Raw CSV with url and type columns.
        #[arg(long, short)]
        input: PathBuf,
        /// Processed CSV to write (default: output.cleaned_path from config).
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Skip the domain/path/query/fragment/parse_failed columns.
        #[arg(long)]
        no_tokenize: bool,
    },

    /// Build the feature matrix from a processed table.
    Features {
        /// Processed CSV with url and label columns.
        #[arg(long, short)]
        input: PathBuf,
        /// Feature CSV to write (default: output.features_path from config).
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// Clean and extract in one pass.
    Run {
        /// Raw CSV with url and type columns.
        #[arg(long, short)]
        input: PathBuf,
        /// Also write the processed table here.
        #[arg(long, value_name = "PATH")]
        cleaned_output: Option<PathBuf>,
        /// Feature CSV to write (default: output.features_path from config).
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// Print the tokens and features of a single URL as JSON.
    Inspect {
        url: String,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<UrlfeatConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Clean {
                input,
                output,
                no_tokenize,
            } => {
                if no_tokenize {
                    cfg.tokenize = false;
                }
                run_clean(&cfg, &input, output.as_deref())?;
            }
            CliCommand::Features {
                input,
                output,
                strategy,
            } => {
                if let Some(s) = strategy {
                    cfg.strategy = s.into();
                }
                run_features(&cfg, &input, output.as_deref())?;
            }
            CliCommand::Run {
                input,
                cleaned_output,
                output,
                strategy,
            } => {
                if let Some(s) = strategy {
                    cfg.strategy = s.into();
                }
                run_pipeline(&cfg, &input, cleaned_output.as_deref(), output.as_deref())?;
            }
            CliCommand::Inspect { url } => run_inspect(&url)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
