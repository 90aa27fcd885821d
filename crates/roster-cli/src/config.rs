//! Query settings from an optional TOML file and command-line overrides.
//!
//! Precedence: command-line flag, then config file, then built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

use roster_analytics::{MAX_HORIZON, TrendOptions};

/// Contents of a `roster.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RosterConfig {
    /// Roster CSV, relative paths resolve against the config file's directory.
    pub dataset: Option<PathBuf>,
    pub top_n: Option<usize>,
    pub horizon: Option<usize>,
    /// Fixed seed for the synthetic series.
    pub seed: Option<u64>,
}

impl RosterConfig {
    /// Reads and parses a config file. A named file that is missing or
    /// malformed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        if let (Some(dataset), Some(base)) = (&config.dataset, path.parent())
            && dataset.is_relative()
        {
            config.dataset = Some(base.join(dataset));
        }
        info!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

/// Values given on the command line; `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct QueryOverrides {
    pub dataset: Option<PathBuf>,
    pub top_n: Option<usize>,
    pub horizon: Option<usize>,
    pub seed: Option<u64>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    pub dataset: PathBuf,
    pub trend: TrendOptions,
    pub seed: Option<u64>,
}

impl QuerySettings {
    pub fn resolve(overrides: QueryOverrides, config: RosterConfig) -> Result<Self> {
        let defaults = TrendOptions::default();
        let Some(dataset) = overrides.dataset.or(config.dataset) else {
            bail!("no roster dataset given; pass --data <PATH> or set `dataset` in the config file");
        };
        let horizon = overrides
            .horizon
            .or(config.horizon)
            .unwrap_or(defaults.horizon);
        if horizon > MAX_HORIZON {
            bail!("horizon {horizon} is larger than the maximum of {MAX_HORIZON}");
        }
        Ok(Self {
            dataset,
            trend: TrendOptions {
                top_n: overrides.top_n.or(config.top_n).unwrap_or(defaults.top_n),
                horizon,
            },
            seed: overrides.seed.or(config.seed),
        })
    }
}
