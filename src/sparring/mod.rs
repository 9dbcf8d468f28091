//! Sparring harness
//!
//! A minimal stand-in for a match host: resolves rounds between two
//! fighters so engines can be exercised end-to-end and compared.

pub mod bout;
pub mod random;
pub mod rules;
pub mod series;

pub use bout::{run_bout, BoutOutcome, BoutReport, RoundRecord};
pub use random::RandomFighter;
pub use rules::SparringRules;
pub use series::{build_fighter, host_config, run_series, SeriesSummary, BLUE_SEED_OFFSET};
