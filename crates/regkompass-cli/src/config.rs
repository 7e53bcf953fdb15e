//! `regkompass.toml` loading.
//!
//! Every section is optional; missing values fall back to the engine's
//! planning defaults.

use regkompass_compliance::{EffortDays, PlanningSettings};
use regkompass_core::{RegkompassError, RegkompassResult};
use serde::Deserialize;
use std::path::Path;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "regkompass.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegkompassConfig {
    pub logging: LoggingConfig,
    pub cost: CostConfig,
    pub roadmap: RoadmapConfig,
    pub synergy: SynergyConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit log lines as JSON instead of the human-readable format.
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    pub day_rate_eur: f64,
    pub effort_days: EffortDays,
}

impl Default for CostConfig {
    fn default() -> Self {
        let planning = PlanningSettings::default();
        Self {
            day_rate_eur: planning.day_rate_eur,
            effort_days: planning.effort_days,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    pub include_green_categories: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SynergyConfig {
    pub realization_factor: f64,
}

impl Default for SynergyConfig {
    fn default() -> Self {
        Self {
            realization_factor: PlanningSettings::default().realization_factor,
        }
    }
}

impl RegkompassConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(raw: &str) -> RegkompassResult<Self> {
        let config: Self = toml::from_str(raw)
            .map_err(|e| RegkompassError::Config(format!("Failed to parse config: {e}")))?;
        config.planning_settings().validate()?;
        Ok(config)
    }

    /// Reads `path`; a missing file is an error.
    pub async fn load(path: &Path) -> RegkompassResult<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            RegkompassError::Config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_toml(&raw)
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub async fn load_or_default(path: &Path) -> RegkompassResult<Self> {
        if tokio::fs::try_exists(path).await? {
            Self::load(path).await
        } else {
            Ok(Self::default())
        }
    }

    pub fn planning_settings(&self) -> PlanningSettings {
        PlanningSettings {
            day_rate_eur: self.cost.day_rate_eur,
            effort_days: self.cost.effort_days,
            realization_factor: self.synergy.realization_factor,
            include_green_categories: self.roadmap.include_green_categories,
        }
    }
}
