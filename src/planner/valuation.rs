//! Action valuation heuristic
//!
//! An attack is worth more the less often the opponent has blocked it, a
//! defense is worth more the more often the opponent has thrown the matching
//! attack. Both scale with base value and energy cost so that expensive moves
//! are not crowded out by cheap ones in the knapsack.

use serde::{Deserialize, Serialize};

use crate::combat::{Action, ActionType};
use crate::core::types::Round;
use crate::planner::history::{HistoryPolicy, HistoryState};

/// Boost applied to a promoted action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PromotionPolicy {
    /// Promoted value is multiplied by a constant
    Fixed { multiplier: f64 },
    /// Promoted value is multiplied by the current round number
    RoundNumber,
}

/// Scores actions for the current round
///
/// Stateless apart from its two policies; every call computes from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuator {
    history: HistoryPolicy,
    promotion: PromotionPolicy,
}

impl Valuator {
    pub fn new(history: HistoryPolicy, promotion: PromotionPolicy) -> Self {
        Self { history, promotion }
    }

    /// Multiplier for an action this round
    pub fn promotion_multiplier(&self, round: Round, promoted: bool) -> f64 {
        if !promoted {
            return 1.0;
        }
        match self.promotion {
            PromotionPolicy::Fixed { multiplier } => multiplier,
            PromotionPolicy::RoundNumber => f64::from(round),
        }
    }

    /// Value of `action` given the opponent history and round
    pub fn value(&self, action: &Action, history: &HistoryState, round: Round, promoted: bool) -> f64 {
        let count = f64::from(history.count(action.kind, action.area));

        let opportunity = match action.kind {
            ActionType::Attack => match self.history {
                // Rounds in which the attack would have landed
                HistoryPolicy::Cumulative => f64::from(round) - count,
                HistoryPolicy::Windowed { window } => 1.0 + f64::from(window) - count,
            },
            ActionType::Defense => 1.0 + count,
        };

        opportunity
            * action.base_value
            * f64::from(action.energy_cost)
            * self.promotion_multiplier(round, promoted)
    }
}
