//! Seeded random sparring partner

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::{ActionCatalog, ActionType, Area, Decision, RoundContext};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::planner::Fighter;

/// Chance of stopping early after each pick, so energy is not always spent
const STOP_CHANCE: f64 = 0.2;

/// Spends energy on random affordable moves each round
pub struct RandomFighter {
    name: String,
    catalog: ActionCatalog,
    energy_per_round: u32,
    rng: ChaCha8Rng,
}

impl RandomFighter {
    /// Random fighter using the default cost tables
    pub fn new(seed: u64) -> Result<Self> {
        Self::from_config(&EngineConfig::default(), seed)
    }

    /// Random fighter using the costs and repeat limits of `config`
    pub fn from_config(config: &EngineConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            name: format!("random#{}", seed),
            catalog: ActionCatalog::from_config(config)?,
            energy_per_round: config.energy_per_round,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl Fighter for RandomFighter {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, _context: &RoundContext) -> Decision {
        let mut decision = Decision::new();
        let mut remaining = self.energy_per_round;

        loop {
            let options: Vec<(ActionType, Area)> = self
                .catalog
                .iter()
                .filter(|action| action.energy_cost <= remaining)
                .filter(|action| match action.kind {
                    ActionType::Attack => {
                        decision.attack_count(action.area) < action.quantity as usize
                    }
                    ActionType::Defense => !decision.defends(action.area),
                })
                .map(|action| (action.kind, action.area))
                .collect();

            let Some(&(kind, area)) = options.choose(&mut self.rng) else {
                break;
            };

            remaining -= self.catalog.get(kind, area).energy_cost;
            decision.add(kind, area);

            if self.rng.gen_bool(STOP_CHANCE) {
                break;
            }
        }

        decision
    }
}
