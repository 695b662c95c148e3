//! Engine configuration.
//!
//! Defaults: sample up to 500 candidates per fetch from the regulator's
//! API, keep at most 20 peers.

use crate::error::BenchResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Provider-side candidate sample size requested per fetch.
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,
    /// Upper bound on the peer set after dedup and ranking.
    #[serde(default = "default_max_peers")]
    pub max_peers: usize,
}

fn default_sample_limit() -> usize {
    500
}

fn default_max_peers() -> usize {
    20
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sample_limit: default_sample_limit(),
            max_peers: default_max_peers(),
        }
    }
}

impl BenchConfig {
    pub fn load(path: &str) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    /// or malformed. A missing config never stops a run.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Config {path} not usable ({e}); using defaults");
                Self::default()
            }
        }
    }
}
