use crate::consts::{DEFAULT_NUM_BITS, DEFAULT_NUM_PROBES};
use crate::errors::Result;
use crate::filter::{FilterParams, WordFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Filter sizing as read from a JSON file, e.g. `{"num_bits": 8000000, "num_probes": 7}`.
///
/// Missing keys fall back to the defaults (8,000,000 bits, 7 probes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub num_bits: usize,
    pub num_probes: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            num_bits: DEFAULT_NUM_BITS,
            num_probes: DEFAULT_NUM_PROBES,
        }
    }
}

impl FilterConfig {
    /// Reads a config file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no filter config, using defaults");
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)?;
        let cfg: FilterConfig = serde_json::from_str(&s)?;
        Ok(cfg)
    }

    pub fn params(&self) -> Result<FilterParams> {
        FilterParams::new(self.num_bits, self.num_probes)
    }

    pub fn build(&self) -> Result<WordFilter> {
        Ok(WordFilter::with_params(self.params()?))
    }
}
