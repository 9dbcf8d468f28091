//! Decision engine - the per-round planner
//!
//! Owns everything that lives for one match (clock, history, catalog) and
//! turns each round context into a decision:
//! advance clock → record history → select promotions → score catalog →
//! solve knapsack → build decision.

use serde::{Deserialize, Serialize};

use crate::combat::{Action, ActionCatalog, ActionType, Decision, RoundContext};
use crate::core::config::{EngineConfig, MAX_ENERGY_PER_ROUND};
use crate::core::error::Result;
use crate::core::types::{Round, RoundClock};
use crate::planner::history::{HistoryState, HistoryTracker};
use crate::planner::knapsack::{self, KnapsackItem};
use crate::planner::promotion::{PromotionSelector, Promotions};
use crate::planner::valuation::Valuator;
use crate::planner::Fighter;

/// An action with its value for the current round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredAction {
    pub action: Action,
    pub value: f64,
    pub promoted: bool,
}

impl KnapsackItem for ScoredAction {
    fn weight(&self) -> u32 {
        self.action.energy_cost
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn quantity(&self) -> u32 {
        self.action.quantity
    }
}

/// Match bookkeeping reported by the host
///
/// Never read by the scoring path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub damage_dealt: i64,
    pub damage_taken: i64,
    pub my_life_points: i32,
    pub opponent_life_points: i32,
}

impl MatchTally {
    fn absorb(&mut self, context: &RoundContext) {
        self.damage_dealt += i64::from(context.my_damage);
        self.damage_taken += i64::from(context.opponent_damage);
        self.my_life_points = context.my_life_points;
        self.opponent_life_points = context.opponent_life_points;
    }
}

/// Per-round strike planner for one match
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    name: String,
    energy_per_round: u32,
    catalog: ActionCatalog,
    clock: RoundClock,
    history: HistoryTracker,
    valuator: Valuator,
    promotions: Promotions,
    tally: MatchTally,
}

impl DecisionEngine {
    /// Build an engine, rejecting invalid configuration up front
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let catalog = ActionCatalog::from_config(config)?;

        Ok(Self {
            name: config.name.clone(),
            energy_per_round: config.energy_per_round,
            catalog,
            clock: RoundClock::new(),
            history: HistoryTracker::new(config.history),
            valuator: Valuator::new(config.history, config.promotion),
            promotions: Promotions::none(),
            tally: MatchTally::default(),
        })
    }

    /// Plan the round using the configured energy budget
    pub fn next_move(&mut self, context: &RoundContext) -> Decision {
        self.next_move_with_budget(context, self.energy_per_round)
    }

    /// Plan the round with an explicit energy budget
    ///
    /// For hosts that grant a different amount of energy in some rounds.
    /// A budget of 0 yields an empty decision. Budgets above
    /// `MAX_ENERGY_PER_ROUND` are capped to it.
    pub fn next_move_with_budget(&mut self, context: &RoundContext, energy: u32) -> Decision {
        let round = self.clock.advance();
        if energy > MAX_ENERGY_PER_ROUND {
            tracing::warn!(round, energy, cap = MAX_ENERGY_PER_ROUND, "energy budget capped");
        }
        let energy = energy.min(MAX_ENERGY_PER_ROUND);
        self.tally.absorb(context);

        let opponent_moves = context.last_opponent_moves.as_ref();
        if opponent_moves.is_none() && round > 1 {
            tracing::warn!(round, "no opponent moves reported; history and promotions skipped");
        }

        self.history.record(opponent_moves);
        self.promotions = PromotionSelector::new().select(&self.catalog, opponent_moves);

        let scored = self.score_catalog();
        let picks = knapsack::solve(&scored, energy);

        let mut decision = Decision::new();
        for pick in &picks {
            decision.add(pick.action.kind, pick.action.area);
        }

        tracing::debug!(
            engine = %self.name,
            round,
            energy,
            spent = knapsack::total_weight(&picks),
            value = knapsack::total_value(&picks),
            attacks = ?decision.attacks(),
            defenses = ?decision.defenses(),
            "round planned"
        );

        decision
    }

    /// Value every catalog action for the current round
    ///
    /// Order matches `ActionCatalog::iter`: defenses, then attacks.
    pub fn score_catalog(&self) -> Vec<ScoredAction> {
        let round = self.clock.current();
        let history = self.history.state();

        self.catalog
            .iter()
            .map(|action| {
                let promoted = match action.kind {
                    ActionType::Attack => self.promotions.is_attack(action.area),
                    ActionType::Defense => self.promotions.is_defense(action.area),
                };
                let value = self.valuator.value(action, history, round, promoted);
                tracing::trace!(
                    kind = ?action.kind,
                    area = %action.area,
                    value,
                    promoted,
                    "scored"
                );
                ScoredAction {
                    action: *action,
                    value,
                    promoted,
                }
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current round (0 before the first call to `next_move`)
    pub fn round(&self) -> Round {
        self.clock.current()
    }

    pub fn energy_per_round(&self) -> u32 {
        self.energy_per_round
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryState {
        self.history.state()
    }

    /// Promotions in force for the current round
    pub fn promotions(&self) -> Promotions {
        self.promotions
    }

    pub fn tally(&self) -> &MatchTally {
        &self.tally
    }
}

impl Fighter for DecisionEngine {
    fn name(&self) -> &str {
        DecisionEngine::name(self)
    }

    fn next_move(&mut self, context: &RoundContext) -> Decision {
        DecisionEngine::next_move(self, context)
    }
}
