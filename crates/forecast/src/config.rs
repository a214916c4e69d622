use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_HORIZON_DAYS: u32 = 90;
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.70;
pub const DEFAULT_AMOUNT_TOLERANCE_CENTS: i64 = 1;

/// Engine tunables. Hosts may load this from a settings file; the engine
/// itself never touches the filesystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Forward scan bound for projection and simulation, in days.
    pub horizon_days: u32,
    /// Description similarity a duplicate candidate must exceed.
    pub similarity_threshold: f32,
    /// Absolute amount difference, in cents, still considered equal.
    pub amount_tolerance_cents: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            horizon_days: DEFAULT_HORIZON_DAYS,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            amount_tolerance_cents: DEFAULT_AMOUNT_TOLERANCE_CENTS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl EngineConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
