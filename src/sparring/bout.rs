//! Bout runner: two fighters, one round at a time

use serde::{Deserialize, Serialize};

use crate::combat::{ActionCatalog, MoveSet, RoundContext};
use crate::core::types::Round;
use crate::planner::Fighter;
use crate::sparring::rules::SparringRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoutOutcome {
    RedWins,
    BlueWins,
    Draw,
}

/// What happened in one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: Round,
    pub red_moves: MoveSet,
    pub blue_moves: MoveSet,
    /// Damage red dealt to blue
    pub red_damage: i32,
    /// Damage blue dealt to red
    pub blue_damage: i32,
    pub red_life: i32,
    pub blue_life: i32,
}

/// Full result of a bout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoutReport {
    pub red: String,
    pub blue: String,
    pub outcome: BoutOutcome,
    pub red_life: i32,
    pub blue_life: i32,
    pub rounds: Vec<RoundRecord>,
}

impl BoutReport {
    pub fn rounds_fought(&self) -> usize {
        self.rounds.len()
    }
}

/// Run a bout to a knockout or the round limit
///
/// `costs` is the host's price list used to clamp over-budget submissions.
pub fn run_bout(
    rules: &SparringRules,
    costs: &ActionCatalog,
    red: &mut dyn Fighter,
    blue: &mut dyn Fighter,
) -> BoutReport {
    let mut red_life = rules.starting_life;
    let mut blue_life = rules.starting_life;
    let mut last: Option<(MoveSet, MoveSet, i32, i32)> = None;
    let mut rounds = Vec::new();

    for round in 1..=rules.max_rounds {
        let (red_context, blue_context) = match &last {
            None => (
                RoundContext::opening(red_life, blue_life),
                RoundContext::opening(blue_life, red_life),
            ),
            Some((red_moves, blue_moves, red_damage, blue_damage)) => (
                RoundContext {
                    last_opponent_moves: Some(blue_moves.clone()),
                    my_damage: *red_damage,
                    opponent_damage: *blue_damage,
                    my_life_points: red_life,
                    opponent_life_points: blue_life,
                },
                RoundContext {
                    last_opponent_moves: Some(red_moves.clone()),
                    my_damage: *blue_damage,
                    opponent_damage: *red_damage,
                    my_life_points: blue_life,
                    opponent_life_points: red_life,
                },
            ),
        };

        let red_moves = rules.clamp_to_budget(&red.next_move(&red_context), costs);
        let blue_moves = rules.clamp_to_budget(&blue.next_move(&blue_context), costs);

        let red_damage = rules.damage(&red_moves, &blue_moves);
        let blue_damage = rules.damage(&blue_moves, &red_moves);
        red_life -= blue_damage;
        blue_life -= red_damage;

        tracing::debug!(round, red_damage, blue_damage, red_life, blue_life, "round resolved");

        rounds.push(RoundRecord {
            round,
            red_moves: red_moves.clone(),
            blue_moves: blue_moves.clone(),
            red_damage,
            blue_damage,
            red_life,
            blue_life,
        });
        last = Some((red_moves, blue_moves, red_damage, blue_damage));

        if red_life <= 0 || blue_life <= 0 {
            break;
        }
    }

    let outcome = match red_life.cmp(&blue_life) {
        std::cmp::Ordering::Greater => BoutOutcome::RedWins,
        std::cmp::Ordering::Less => BoutOutcome::BlueWins,
        std::cmp::Ordering::Equal => BoutOutcome::Draw,
    };

    BoutReport {
        red: red.name().to_string(),
        blue: blue.name().to_string(),
        outcome,
        red_life,
        blue_life,
        rounds,
    }
}
