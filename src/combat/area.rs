//! Target areas for attacks and defenses
//!
//! The set of areas is closed, so per-area state lives in a fixed array
//! indexed by the area ordinal instead of a map.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Body zone an attack targets or a defense covers
///
/// Declaration order is the canonical iteration order. Tie-breaks in
/// promotion selection and item order in the solver depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    HookKick,
    HookPunch,
    LowKick,
    UppercutPunch,
}

impl Area {
    /// Number of areas
    pub const COUNT: usize = 4;

    /// Returns all areas in canonical order
    pub fn all() -> [Area; Area::COUNT] {
        [
            Area::HookKick,
            Area::HookPunch,
            Area::LowKick,
            Area::UppercutPunch,
        ]
    }

    /// Ordinal used to index per-area tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Area::HookKick => "hook_kick",
            Area::HookPunch => "hook_punch",
            Area::LowKick => "low_kick",
            Area::UppercutPunch => "uppercut_punch",
        }
    }

    /// Parse the snake_case name used in config files and CLI arguments
    pub fn from_name(name: &str) -> Option<Area> {
        Area::all().into_iter().find(|area| area.name() == name)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per area, exhaustive by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AreaTable<T>([T; Area::COUNT]);

impl<T> AreaTable<T> {
    /// Build a table by evaluating `f` for each area in canonical order
    pub fn from_fn(f: impl FnMut(Area) -> T) -> Self {
        Self(Area::all().map(f))
    }

    /// Iterate `(area, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Area, &T)> {
        Area::all().into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Copy + Default> AreaTable<T> {
    /// Reset every entry to its default
    pub fn clear(&mut self) {
        self.0 = [T::default(); Area::COUNT];
    }
}

impl<T> Index<Area> for AreaTable<T> {
    type Output = T;

    fn index(&self, area: Area) -> &T {
        &self.0[area.index()]
    }
}

impl<T> IndexMut<Area> for AreaTable<T> {
    fn index_mut(&mut self, area: Area) -> &mut T {
        &mut self.0[area.index()]
    }
}
