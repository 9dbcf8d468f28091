//! Bout constants - all tunable sparring values in one place
//!
//! Planner tuning lives in `EngineConfig`; these only drive the sparring
//! harness that resolves rounds between two fighters.

use crate::combat::area::Area;

// Life constants
pub const STARTING_LIFE: i32 = 150;

// Length constants
pub const MAX_ROUNDS: u32 = 40;

// Strike damage when the target area is left undefended
pub const HOOK_KICK_DAMAGE: i32 = 10;
pub const HOOK_PUNCH_DAMAGE: i32 = 6;
pub const UPPERCUT_PUNCH_DAMAGE: i32 = 3;
pub const LOW_KICK_DAMAGE: i32 = 1;

/// Damage an undefended strike to `area` deals
pub fn strike_damage(area: Area) -> i32 {
    match area {
        Area::HookKick => HOOK_KICK_DAMAGE,
        Area::HookPunch => HOOK_PUNCH_DAMAGE,
        Area::UppercutPunch => UPPERCUT_PUNCH_DAMAGE,
        Area::LowKick => LOW_KICK_DAMAGE,
    }
}
