//! Engine configuration with documented constants
//!
//! Every tunable number of the planner lives here. Configs are validated
//! once when an engine is built so the per-round path never has to fail.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::combat::Area;
use crate::core::error::{Result, StrikeError};
use crate::planner::{HistoryPolicy, PromotionPolicy};

/// Largest per-round energy budget a config may set
///
/// The solver's table grows linearly with the budget.
pub const MAX_ENERGY_PER_ROUND: u32 = 1_000;

/// Longest history window a config may set
pub const MAX_HISTORY_WINDOW: u32 = 1_000;

/// Configuration for one decision engine
///
/// Base values are roughly "damage per energy point" for attacks and
/// "damage prevented per energy point" for defenses. The valuator multiplies
/// them back by the energy cost so cheap and expensive moves compete fairly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name (set from the file stem when loaded from disk)
    #[serde(default)]
    pub name: String,

    // === BUDGET ===
    /// Energy available each round (knapsack capacity)
    pub energy_per_round: u32,

    /// How many times the same attack may be thrown in one round
    ///
    /// Defenses are never repeated, so there is no defense counterpart.
    pub max_attack_repeats: u32,

    // === POLICIES ===
    /// How the opponent's past moves are counted
    pub history: HistoryPolicy,

    /// How much a promoted action is boosted
    pub promotion: PromotionPolicy,

    // === PER-AREA TABLES ===
    /// Static attack value per area
    pub attack_base_values: BTreeMap<Area, f64>,

    /// Static defense value per area
    pub defense_base_values: BTreeMap<Area, f64>,

    /// Energy cost of an attack per area
    pub attack_costs: BTreeMap<Area, u32>,

    /// Energy cost of a defense per area
    pub defense_costs: BTreeMap<Area, u32>,
}

impl Default for EngineConfig {
    /// Cumulative history with round-number promotion
    fn default() -> Self {
        Self {
            name: "cumulative".to_string(),
            energy_per_round: 12,
            max_attack_repeats: 2,
            history: HistoryPolicy::Cumulative,
            promotion: PromotionPolicy::RoundNumber,
            attack_base_values: BTreeMap::from([
                (Area::HookKick, 11.0 / 4.0),
                (Area::HookPunch, 6.0 / 3.0),
                (Area::UppercutPunch, 3.5 / 2.0),
                (Area::LowKick, 0.2 / 1.0),
            ]),
            defense_base_values: BTreeMap::from([
                (Area::HookKick, 12.0 / 4.0),
                (Area::HookPunch, 6.0 / 4.0),
                (Area::UppercutPunch, 3.5 / 4.0),
                (Area::LowKick, 0.2 / 4.0),
            ]),
            attack_costs: BTreeMap::from([
                (Area::HookKick, 4),
                (Area::HookPunch, 3),
                (Area::UppercutPunch, 2),
                (Area::LowKick, 1),
            ]),
            defense_costs: Area::all().into_iter().map(|area| (area, 4)).collect(),
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Ten-round sliding window with a fixed x2 promotion
    pub fn windowed() -> Self {
        Self {
            name: "windowed".to_string(),
            history: HistoryPolicy::Windowed { window: 10 },
            promotion: PromotionPolicy::Fixed { multiplier: 2.0 },
            ..Self::default()
        }
    }

    /// Validate configuration for internal consistency
    ///
    /// Missing table entries are reported when the catalog is built, since
    /// that is where they are looked up.
    pub fn validate(&self) -> Result<()> {
        if self.energy_per_round == 0 {
            return Err(StrikeError::InvalidConfig(
                "energy_per_round must be positive".into(),
            ));
        }

        if self.energy_per_round > MAX_ENERGY_PER_ROUND {
            return Err(StrikeError::InvalidConfig(format!(
                "energy_per_round ({}) exceeds the maximum of {}",
                self.energy_per_round, MAX_ENERGY_PER_ROUND
            )));
        }

        if self.max_attack_repeats == 0 {
            return Err(StrikeError::InvalidConfig(
                "max_attack_repeats must be at least 1".into(),
            ));
        }

        if let HistoryPolicy::Windowed { window: 0 } = self.history {
            return Err(StrikeError::InvalidConfig(
                "history window must be positive".into(),
            ));
        }

        if let HistoryPolicy::Windowed { window } = self.history {
            if window > MAX_HISTORY_WINDOW {
                return Err(StrikeError::InvalidConfig(format!(
                    "history window ({}) exceeds the maximum of {}",
                    window, MAX_HISTORY_WINDOW
                )));
            }
        }

        if let PromotionPolicy::Fixed { multiplier } = self.promotion {
            if !(multiplier.is_finite() && multiplier > 0.0) {
                return Err(StrikeError::InvalidConfig(format!(
                    "promotion multiplier ({}) must be positive and finite",
                    multiplier
                )));
            }
        }

        let base_values = self
            .attack_base_values
            .iter()
            .chain(self.defense_base_values.iter());
        for (area, value) in base_values {
            if !(value.is_finite() && *value > 0.0) {
                return Err(StrikeError::InvalidConfig(format!(
                    "base value for {} ({}) must be positive and finite",
                    area, value
                )));
            }
        }

        let costs = self.attack_costs.iter().chain(self.defense_costs.iter());
        for (area, cost) in costs {
            if *cost == 0 {
                return Err(StrikeError::InvalidConfig(format!(
                    "energy cost for {} must be at least 1",
                    area
                )));
            }
        }

        Ok(())
    }
}

/// Load an engine config from a TOML file
///
/// The config name defaults to the file stem when the file does not set one.
pub fn load_engine_config(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)?;
    let mut config: EngineConfig = toml::from_str(&contents)?;

    if config.name.is_empty() {
        config.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    config.validate()?;
    Ok(config)
}

/// Load `data/engines/{name}.toml`
pub fn load_named_config(name: &str) -> Result<EngineConfig> {
    load_engine_config(&config_path(name))
}

/// Get path to a named engine config file
fn config_path(name: &str) -> PathBuf {
    PathBuf::from("data/engines").join(format!("{}.toml", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::windowed().validate().is_ok());
    }

    #[test]
    fn test_default_tables_cover_every_area() {
        let config = EngineConfig::default();
        for area in Area::all() {
            assert!(config.attack_base_values.contains_key(&area));
            assert!(config.defense_base_values.contains_key(&area));
            assert!(config.attack_costs.contains_key(&area));
            assert!(config.defense_costs.contains_key(&area));
        }
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = EngineConfig {
            energy_per_round: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(StrikeError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = EngineConfig {
            history: HistoryPolicy::Windowed { window: 0 },
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_budget_rejected() {
        let at_limit = EngineConfig {
            energy_per_round: MAX_ENERGY_PER_ROUND,
            ..EngineConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let config = EngineConfig {
            energy_per_round: 2_000_000_000,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(StrikeError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_window_rejected() {
        let at_limit = EngineConfig {
            history: HistoryPolicy::Windowed {
                window: MAX_HISTORY_WINDOW,
            },
            ..EngineConfig::windowed()
        };
        assert!(at_limit.validate().is_ok());

        let config = EngineConfig {
            history: HistoryPolicy::Windowed { window: u32::MAX },
            ..EngineConfig::windowed()
        };
        assert!(matches!(config.validate(), Err(StrikeError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_cost_rejected() {
        let mut config = EngineConfig::default();
        config.attack_costs.insert(Area::LowKick, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_base_value_rejected() {
        let mut config = EngineConfig::default();
        config.defense_base_values.insert(Area::HookPunch, -1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let config = EngineConfig {
            promotion: PromotionPolicy::Fixed { multiplier: 0.0 },
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_toml_config() {
        let text = r#"
            energy_per_round = 10
            max_attack_repeats = 3

            [history]
            policy = "windowed"
            window = 5

            [promotion]
            policy = "fixed"
            multiplier = 1.5

            [attack_base_values]
            hook_kick = 2.0
            hook_punch = 1.5
            low_kick = 0.5
            uppercut_punch = 1.0

            [defense_base_values]
            hook_kick = 3.0
            hook_punch = 1.5
            low_kick = 0.1
            uppercut_punch = 1.0

            [attack_costs]
            hook_kick = 4
            hook_punch = 3
            low_kick = 1
            uppercut_punch = 2

            [defense_costs]
            hook_kick = 4
            hook_punch = 4
            low_kick = 4
            uppercut_punch = 4
        "#;

        let config: EngineConfig = toml::from_str(text).expect("config should parse");
        assert_eq!(config.energy_per_round, 10);
        assert_eq!(config.max_attack_repeats, 3);
        assert_eq!(config.history, HistoryPolicy::Windowed { window: 5 });
        assert_eq!(config.promotion, PromotionPolicy::Fixed { multiplier: 1.5 });
        assert_eq!(config.attack_base_values[&Area::HookKick], 2.0);
        assert_eq!(config.attack_costs[&Area::UppercutPunch], 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_cumulative_config() {
        let config = load_named_config("cumulative").expect("Should load cumulative config");
        assert_eq!(config.name, "cumulative");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_windowed_config() {
        let config = load_named_config("windowed").expect("Should load windowed config");
        assert_eq!(config, EngineConfig::windowed());
    }

    #[test]
    fn test_load_missing_config_is_io_error() {
        let result = load_named_config("does_not_exist");
        assert!(matches!(result, Err(StrikeError::IoError(_))));
    }
}
