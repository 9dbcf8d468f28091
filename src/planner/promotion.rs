//! One-round promotions from the opponent's previous moves
//!
//! If the opponent left an area open last round, the most valuable attack on
//! an open area gets a boost. If the opponent attacked last round, the most
//! valuable matching defense gets a boost.

use serde::{Deserialize, Serialize};

use crate::combat::{ActionCatalog, Area, MoveSet};

/// Areas promoted for exactly one round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotions {
    pub attack: Option<Area>,
    pub defense: Option<Area>,
}

impl Promotions {
    /// No promotion at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_attack(&self, area: Area) -> bool {
        self.attack == Some(area)
    }

    pub fn is_defense(&self, area: Area) -> bool {
        self.defense == Some(area)
    }
}

/// Picks this round's promotions
pub struct PromotionSelector;

impl PromotionSelector {
    pub fn new() -> Self {
        Self
    }

    /// Promotions for the round following `opponent_moves`
    pub fn select(&self, catalog: &ActionCatalog, opponent_moves: Option<&MoveSet>) -> Promotions {
        let Some(moves) = opponent_moves else {
            return Promotions::none();
        };

        Promotions {
            attack: self.best_attack(catalog, moves),
            defense: self.best_defense(catalog, moves),
        }
    }

    /// Highest attack base value among areas the opponent left open
    fn best_attack(&self, catalog: &ActionCatalog, moves: &MoveSet) -> Option<Area> {
        let open = Area::all().into_iter().filter(|&area| !moves.defends(area));
        highest(open, |area| catalog.attack(area).base_value)
    }

    /// Highest defense base value among areas the opponent attacked
    fn best_defense(&self, catalog: &ActionCatalog, moves: &MoveSet) -> Option<Area> {
        highest(moves.attacks().iter().copied(), |area| {
            catalog.defense(area).base_value
        })
    }
}

impl Default for PromotionSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// First area with a strictly greater value than every earlier one
fn highest(areas: impl Iterator<Item = Area>, value: impl Fn(Area) -> f64) -> Option<Area> {
    let mut best: Option<(Area, f64)> = None;
    for area in areas {
        let v = value(area);
        match best {
            Some((_, best_value)) if v <= best_value => {}
            _ => best = Some((area, v)),
        }
    }
    best.map(|(area, _)| area)
}
