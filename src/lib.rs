//! Kumite - Per-Round Strike Planner
//!
//! Each round the planner weighs every attack and defense by what the
//! opponent has shown so far, then spends its energy budget on the best
//! bundle of moves.

pub mod combat;
pub mod core;
pub mod planner;
pub mod sparring;
