//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Round index within a match (round 1 is the first round played)
pub type Round = u32;

/// Match round counter
///
/// Starts at 0 before the first round. Advanced exactly once per round by
/// whoever owns the match state; everything else receives the round as a
/// plain value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    round: Round,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next round and return its index
    pub fn advance(&mut self) -> Round {
        self.round = self.round.saturating_add(1);
        self.round
    }

    /// Current round (0 until the first call to `advance`)
    pub fn current(&self) -> Round {
        self.round
    }
}
