use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Feature extraction strategy. Both produce identical vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Column-at-a-time passes over the whole batch.
    #[default]
    Vectorized,
    /// One URL at a time.
    Scalar,
}

/// Default output locations for the CLI (optional section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where `clean` writes the processed table when `--output` is not given.
    #[serde(default)]
    pub cleaned_path: Option<PathBuf>,
    /// Where `features` writes the matrix when `--output` is not given.
    #[serde(default)]
    pub features_path: Option<PathBuf>,
}

/// Global configuration loaded from `~/.config/urlfeat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlfeatConfig {
    /// Column holding the raw URL string.
    pub url_column: String,
    /// Column holding the multi-class label (benign/phishing/...).
    pub type_column: String,
    /// Column holding the binary label; read directly when `type_column` is absent.
    pub label_column: String,
    /// Extraction strategy.
    #[serde(default)]
    pub strategy: Strategy,
    /// Add domain/path/query/fragment/parse_failed diagnostic columns to the cleaned table.
    #[serde(default = "default_tokenize")]
    pub tokenize: bool,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

fn default_tokenize() -> bool {
    true
}

impl Default for UrlfeatConfig {
    fn default() -> Self {
        Self {
            url_column: "url".to_string(),
            type_column: "type".to_string(),
            label_column: "label".to_string(),
            strategy: Strategy::default(),
            tokenize: true,
            output: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlfeat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlfeatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlfeatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<UrlfeatConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UrlfeatConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
