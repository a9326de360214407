//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key is optional; flags
//! given on the command line take precedence over file values.
//!
//! ```yaml
//! deny_warnings: true
//! format: json
//! documents_dir: blueprints/sample
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// How validation reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `OK`/`FAIL` line per document followed by its messages.
    #[default]
    Text,
    /// One JSON report per document.
    Json,
}

/// Settings loaded from the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Treat warnings (unknown properties) as validation failures.
    pub deny_warnings: bool,
    /// Report format.
    pub format: OutputFormat,
    /// Directory that relative document paths are resolved against.
    pub documents_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load the config file at `path`, or defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid config document.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded CLI config");
        Ok(config)
    }
}
