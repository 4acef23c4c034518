use serde::{Deserialize, Serialize};

use crate::api::proposal::Proposal;
use crate::extensions::dodge::DodgeConfig;
use crate::systems::burst::{BurstConfig, DEFAULT_COUNT};

/// Top-level settings document, loaded from JSON at startup.
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartburstConfig {
    /// Physics and palette of the celebration burst.
    pub burst: BurstConfig,
    /// Particles per celebration burst.
    pub count: usize,
    /// Seconds between answering and the closing message.
    pub celebration_secs: f32,
    /// Escaping button tuning.
    pub dodge: DodgeConfig,
    /// RNG seed; 0 lets the host pick one.
    pub seed: u64,
}

impl Default for HeartburstConfig {
    fn default() -> Self {
        Self {
            burst: BurstConfig::default(),
            count: DEFAULT_COUNT,
            celebration_secs: Proposal::DEFAULT_CELEBRATION_SECS,
            dodge: DodgeConfig::default(),
            seed: 0,
        }
    }
}

impl HeartburstConfig {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
