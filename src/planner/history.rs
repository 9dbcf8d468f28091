//! Opponent history tracking
//!
//! Counts how often the opponent countered each of our possible actions:
//! an opponent defense on an area counts against our attack there, an
//! opponent attack on an area counts towards our defense there.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::combat::{ActionType, Area, AreaTable, MoveSet};

/// How opponent moves are accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum HistoryPolicy {
    /// Every observed move counts for the rest of the match
    Cumulative,
    /// Only the last `window` observed rounds count
    Windowed { window: u32 },
}

/// One counter per (area, action type)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Times the opponent defended each area (counters our attack)
    times_countered: AreaTable<u32>,
    /// Times the opponent attacked each area (our defense was needed)
    times_needed: AreaTable<u32>,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter relevant to our `kind` of action on `area`
    pub fn count(&self, kind: ActionType, area: Area) -> u32 {
        match kind {
            ActionType::Attack => self.times_countered[area],
            ActionType::Defense => self.times_needed[area],
        }
    }

    pub fn times_countered(&self, area: Area) -> u32 {
        self.times_countered[area]
    }

    pub fn times_needed(&self, area: Area) -> u32 {
        self.times_needed[area]
    }

    /// Overwrite a single counter
    pub fn set(&mut self, kind: ActionType, area: Area, count: u32) {
        match kind {
            ActionType::Attack => self.times_countered[area] = count,
            ActionType::Defense => self.times_needed[area] = count,
        }
    }

    /// Add one round of opponent moves to the counters
    fn absorb(&mut self, opponent_moves: &MoveSet) {
        for &area in opponent_moves.defenses() {
            self.times_countered[area] = self.times_countered[area].saturating_add(1);
        }
        for &area in opponent_moves.attacks() {
            self.times_needed[area] = self.times_needed[area].saturating_add(1);
        }
    }

    fn clear(&mut self) {
        self.times_countered.clear();
        self.times_needed.clear();
    }
}

/// Rolling memory of the opponent's behavior for one match
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    policy: HistoryPolicy,
    state: HistoryState,
    /// Retained rounds for the windowed policy, oldest first
    recent: VecDeque<MoveSet>,
}

impl HistoryTracker {
    pub fn new(policy: HistoryPolicy) -> Self {
        Self {
            policy,
            state: HistoryState::new(),
            recent: VecDeque::new(),
        }
    }

    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Number of rounds currently inside the window (0 for cumulative)
    pub fn retained_rounds(&self) -> usize {
        self.recent.len()
    }

    /// Record the opponent's moves from the previous round
    ///
    /// `None` (opening round, or a host that lost the data) leaves the
    /// counters untouched and does not occupy a window slot. The window
    /// therefore covers the last `window` rounds with reported moves, which
    /// can reach further back than the last `window` rounds played.
    pub fn record(&mut self, opponent_moves: Option<&MoveSet>) {
        let Some(moves) = opponent_moves else {
            return;
        };

        match self.policy {
            HistoryPolicy::Cumulative => self.state.absorb(moves),
            HistoryPolicy::Windowed { window } => {
                self.recent.push_back(moves.clone());
                while self.recent.len() > window as usize {
                    self.recent.pop_front();
                }

                self.state.clear();
                for round in &self.recent {
                    self.state.absorb(round);
                }
            }
        }
    }
}
