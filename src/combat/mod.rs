pub mod action;
pub mod area;
pub mod constants;
pub mod moves;

pub use action::{Action, ActionCatalog, ActionType};
pub use area::{Area, AreaTable};
pub use moves::{Decision, MoveSet, RoundContext};
