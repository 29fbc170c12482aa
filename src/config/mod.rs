use crate::core::constants::{defaults, ignored_dirs};
use anyhow::{Context, Result};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration actions for pydepmap
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init,
    /// Show current configuration
    Show,
}

/// Per-project settings, read from `.pydepmap.toml` at the project root.
/// Command-line flags always win over file values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MapperConfig {
    /// Entry file for `map`, relative to the project root.
    pub entry: PathBuf,
    /// Default file for saved maps.
    pub output: PathBuf,
    /// Directory names `scan` skips.
    pub ignored_dirs: Vec<String>,
    /// Extra module search roots consulted after the project root.
    pub search_roots: Vec<PathBuf>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            entry: PathBuf::from(defaults::ENTRY_FILE),
            output: PathBuf::from(defaults::MAP_OUTPUT),
            ignored_dirs: ignored_dirs::ALL.iter().map(|d| d.to_string()).collect(),
            search_roots: Vec::new(),
        }
    }
}

impl MapperConfig {
    /// Load the config file under `root`, or defaults when there is none.
    /// A file that exists but does not parse is an error, not a fallback.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(defaults::CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
