//! Moves exchanged with the host each round

use serde::{Deserialize, Serialize};

use crate::combat::action::{ActionCatalog, ActionType};
use crate::combat::area::Area;

/// Attacks and defenses one fighter committed to in a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    attacks: Vec<Area>,
    defenses: Vec<Area>,
}

/// What a fighter hands back to the host for the current round
pub type Decision = MoveSet;

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit attack and defense lists
    pub fn from_parts(attacks: Vec<Area>, defenses: Vec<Area>) -> Self {
        Self { attacks, defenses }
    }

    pub fn add_attack(&mut self, area: Area) {
        self.attacks.push(area);
    }

    pub fn add_defense(&mut self, area: Area) {
        self.defenses.push(area);
    }

    pub fn add(&mut self, kind: ActionType, area: Area) {
        match kind {
            ActionType::Attack => self.add_attack(area),
            ActionType::Defense => self.add_defense(area),
        }
    }

    pub fn attacks(&self) -> &[Area] {
        &self.attacks
    }

    pub fn defenses(&self) -> &[Area] {
        &self.defenses
    }

    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty() && self.defenses.is_empty()
    }

    /// Does this move set defend `area`?
    pub fn defends(&self, area: Area) -> bool {
        self.defenses.contains(&area)
    }

    /// How many times `area` is attacked
    pub fn attack_count(&self, area: Area) -> usize {
        self.attacks.iter().filter(|&&a| a == area).count()
    }

    /// Total energy spent according to `catalog`
    pub fn energy(&self, catalog: &ActionCatalog) -> u32 {
        let attack_energy: u32 = self
            .attacks
            .iter()
            .map(|&area| catalog.attack(area).energy_cost)
            .sum();
        let defense_energy: u32 = self
            .defenses
            .iter()
            .map(|&area| catalog.defense(area).energy_cost)
            .sum();
        attack_energy + defense_energy
    }
}

/// Everything the host tells a fighter at the start of a round
///
/// Damage and life figures are bookkeeping only; the planner never scores
/// with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    /// Opponent's moves from the previous round (`None` in the first round)
    pub last_opponent_moves: Option<MoveSet>,
    /// Damage this fighter dealt last round
    pub my_damage: i32,
    /// Damage the opponent dealt last round
    pub opponent_damage: i32,
    pub my_life_points: i32,
    pub opponent_life_points: i32,
}

impl RoundContext {
    /// Context for the opening round: no opponent moves yet
    pub fn opening(my_life_points: i32, opponent_life_points: i32) -> Self {
        Self {
            last_opponent_moves: None,
            my_damage: 0,
            opponent_damage: 0,
            my_life_points,
            opponent_life_points,
        }
    }

    /// Context carrying only the opponent's previous moves
    pub fn after(opponent_moves: MoveSet) -> Self {
        Self {
            last_opponent_moves: Some(opponent_moves),
            ..Self::default()
        }
    }
}
