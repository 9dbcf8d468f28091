//! Per-round strike planning
//!
//! Architecture: Trait + Data hybrid
//! - Fighter trait is what a host drives, one call per round
//! - DecisionEngine is the knapsack-backed implementation
//! - History, valuation and promotion are separate pieces threaded together
//!   by the engine, with the round index passed as a plain value

pub mod engine;
pub mod history;
pub mod knapsack;
pub mod promotion;
pub mod valuation;

pub use engine::{DecisionEngine, MatchTally, ScoredAction};
pub use history::{HistoryPolicy, HistoryState, HistoryTracker};
pub use knapsack::{solve, KnapsackItem};
pub use promotion::{PromotionSelector, Promotions};
pub use valuation::{PromotionPolicy, Valuator};

use crate::combat::{Decision, RoundContext};

/// Anything that can fight a match, one round at a time
pub trait Fighter {
    /// Display name for reports
    fn name(&self) -> &str;

    /// Decide this round's moves from the host's context
    fn next_move(&mut self, context: &RoundContext) -> Decision;
}
