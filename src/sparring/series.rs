//! Fighter roster and parallel bout series
//!
//! Every bout builds its own fighters, so no planner state is shared
//! between bouts running on different threads.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

use crate::combat::ActionCatalog;
use crate::core::config::{load_engine_config, EngineConfig};
use crate::core::error::{Result, StrikeError};
use crate::planner::{DecisionEngine, Fighter};
use crate::sparring::bout::{run_bout, BoutOutcome, BoutReport};
use crate::sparring::random::RandomFighter;
use crate::sparring::rules::SparringRules;

/// Build a fighter from a roster entry
///
/// Accepted entries: `random`, `cumulative`, `windowed`, or a path to a
/// `.toml` engine config. In a bout, moves are charged at the host's prices
/// (see `host_config`), not at the prices the fighter planned with.
pub fn build_fighter(entry: &str, seed: u64) -> Result<Box<dyn Fighter>> {
    let fighter: Box<dyn Fighter> = match entry {
        "random" => Box::new(RandomFighter::new(seed)?),
        "cumulative" => Box::new(DecisionEngine::new(&EngineConfig::default())?),
        "windowed" => Box::new(DecisionEngine::new(&EngineConfig::windowed())?),
        path if path.ends_with(".toml") => {
            let config = load_engine_config(Path::new(path))?;
            Box::new(DecisionEngine::new(&config)?)
        }
        other => return Err(StrikeError::UnknownFighter(other.to_string())),
    };
    Ok(fighter)
}

/// Engine config whose costs and budget a bout host charges
///
/// Accepts `cumulative`, `windowed`, or a path to a `.toml` engine config.
pub fn host_config(entry: &str) -> Result<EngineConfig> {
    match entry {
        "cumulative" => Ok(EngineConfig::default()),
        "windowed" => Ok(EngineConfig::windowed()),
        path if path.ends_with(".toml") => load_engine_config(Path::new(path)),
        other => Err(StrikeError::InvalidConfig(format!(
            "unknown host config: {}",
            other
        ))),
    }
}

/// Added to the bout seed to derive the blue corner's seed
pub const BLUE_SEED_OFFSET: u64 = 0x9E37_79B9;

/// Aggregate over a series of bouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub red: String,
    pub blue: String,
    pub bouts: usize,
    pub red_wins: usize,
    pub blue_wins: usize,
    pub draws: usize,
    pub mean_red_life: f64,
    pub mean_blue_life: f64,
    pub mean_rounds: f64,
}

impl SeriesSummary {
    pub fn from_reports(red: &str, blue: &str, reports: &[BoutReport]) -> Self {
        let count = |outcome: BoutOutcome| reports.iter().filter(|r| r.outcome == outcome).count();
        let mean = |f: fn(&BoutReport) -> f64| {
            if reports.is_empty() {
                0.0
            } else {
                reports.iter().map(f).sum::<f64>() / reports.len() as f64
            }
        };

        Self {
            red: red.to_string(),
            blue: blue.to_string(),
            bouts: reports.len(),
            red_wins: count(BoutOutcome::RedWins),
            blue_wins: count(BoutOutcome::BlueWins),
            draws: count(BoutOutcome::Draw),
            mean_red_life: mean(|r| f64::from(r.red_life)),
            mean_blue_life: mean(|r| f64::from(r.blue_life)),
            mean_rounds: mean(|r| r.rounds_fought() as f64),
        }
    }
}

/// Run one bout per seed in parallel
///
/// Moves are clamped against `costs` and `rules.energy_per_round`. Blue is
/// seeded with `seed + BLUE_SEED_OFFSET` so two random fighters do not
/// mirror each other.
pub fn run_series(
    red: &str,
    blue: &str,
    rules: &SparringRules,
    costs: &ActionCatalog,
    seeds: Range<u64>,
) -> Result<Vec<BoutReport>> {
    seeds
        .into_par_iter()
        .map(|seed| {
            let mut red_fighter = build_fighter(red, seed)?;
            let mut blue_fighter = build_fighter(blue, seed.wrapping_add(BLUE_SEED_OFFSET))?;
            Ok(run_bout(
                rules,
                costs,
                red_fighter.as_mut(),
                blue_fighter.as_mut(),
            ))
        })
        .collect()
}
