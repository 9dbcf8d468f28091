//! Round resolution rules for sparring bouts
//!
//! Deliberately small: a strike lands unless the defender covered its area,
//! and landed strikes deal fixed per-area damage.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{strike_damage, MAX_ROUNDS, STARTING_LIFE};
use crate::combat::{ActionCatalog, MoveSet};
use crate::core::config::EngineConfig;

/// Bout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparringRules {
    pub starting_life: i32,
    pub max_rounds: u32,
    pub energy_per_round: u32,
}

impl Default for SparringRules {
    fn default() -> Self {
        Self {
            starting_life: STARTING_LIFE,
            max_rounds: MAX_ROUNDS,
            energy_per_round: 12,
        }
    }
}

impl SparringRules {
    /// Default bout length and life with the host config's energy budget
    pub fn for_host(host: &EngineConfig) -> Self {
        Self {
            energy_per_round: host.energy_per_round,
            ..Self::default()
        }
    }

    /// Damage `attacker` deals to `defender` this round
    pub fn damage(&self, attacker: &MoveSet, defender: &MoveSet) -> i32 {
        attacker
            .attacks()
            .iter()
            .filter(|&&area| !defender.defends(area))
            .map(|&area| strike_damage(area))
            .sum()
    }

    /// Drop moves that would exceed the energy budget
    ///
    /// Defenses are charged first, then attacks, each in submitted order.
    /// A defense submitted twice only counts once.
    pub fn clamp_to_budget(&self, moves: &MoveSet, catalog: &ActionCatalog) -> MoveSet {
        let mut remaining = self.energy_per_round;
        let mut clamped = MoveSet::new();

        for &area in moves.defenses() {
            let cost = catalog.defense(area).energy_cost;
            if !clamped.defends(area) && cost <= remaining {
                remaining -= cost;
                clamped.add_defense(area);
            }
        }
        for &area in moves.attacks() {
            let cost = catalog.attack(area).energy_cost;
            if cost <= remaining {
                remaining -= cost;
                clamped.add_attack(area);
            }
        }

        clamped
    }
}
