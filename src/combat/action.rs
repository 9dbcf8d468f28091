//! Action definitions and catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::combat::area::{Area, AreaTable};
use crate::core::config::EngineConfig;
use crate::core::error::{Result, StrikeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Attack,
    Defense,
}

/// A single attack or defense on one area
///
/// Plain data: scoring lives in the planner, not on the action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionType,
    pub area: Area,
    /// Static value from the config tables
    pub base_value: f64,
    /// Energy spent when the action is chosen
    pub energy_cost: u32,
    /// How many times the action may be chosen in one round
    pub quantity: u32,
}

impl Action {
    pub fn is_attack(&self) -> bool {
        self.kind == ActionType::Attack
    }
}

/// Every action available in a match, built once from config
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCatalog {
    attacks: AreaTable<Action>,
    defenses: AreaTable<Action>,
}

impl ActionCatalog {
    /// Build the catalog, failing on any area missing from a config table
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let attacks = Self::build_table(
            ActionType::Attack,
            &config.attack_base_values,
            &config.attack_costs,
            config.max_attack_repeats,
        )?;
        let defenses = Self::build_table(
            ActionType::Defense,
            &config.defense_base_values,
            &config.defense_costs,
            1,
        )?;

        Ok(Self { attacks, defenses })
    }

    fn build_table(
        kind: ActionType,
        base_values: &BTreeMap<Area, f64>,
        costs: &BTreeMap<Area, u32>,
        quantity: u32,
    ) -> Result<AreaTable<Action>> {
        let mut actions = Vec::with_capacity(Area::COUNT);
        for area in Area::all() {
            let base_value = *base_values
                .get(&area)
                .ok_or(StrikeError::MissingBaseValue { kind, area })?;
            let energy_cost = *costs
                .get(&area)
                .ok_or(StrikeError::MissingEnergyCost { kind, area })?;
            if energy_cost == 0 {
                return Err(StrikeError::InvalidConfig(format!(
                    "{:?} on {} has zero energy cost",
                    kind, area
                )));
            }

            actions.push(Action {
                kind,
                area,
                base_value,
                energy_cost,
                quantity,
            });
        }

        Ok(AreaTable::from_fn(|area| actions[area.index()]))
    }

    pub fn get(&self, kind: ActionType, area: Area) -> &Action {
        match kind {
            ActionType::Attack => &self.attacks[area],
            ActionType::Defense => &self.defenses[area],
        }
    }

    pub fn attack(&self, area: Area) -> &Action {
        &self.attacks[area]
    }

    pub fn defense(&self, area: Area) -> &Action {
        &self.defenses[area]
    }

    /// All actions: defenses first, then attacks, each in canonical area order
    ///
    /// This is the item order handed to the solver.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.defenses.values().chain(self.attacks.values())
    }

    pub fn len(&self) -> usize {
        2 * Area::COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
