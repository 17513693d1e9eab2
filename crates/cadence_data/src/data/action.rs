use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an action inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub usize);

impl ActionId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Informational action category. Carried as part of an action's identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCategory {
    Weaponskill,
    InstantAbility,
    Spell,
}

/// Which cost/potency table an action reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Element {
    /// Cheaper while chilled, stronger while burning.
    Fire,
    /// Cheaper while burning, weaker while burning.
    Ice,
    /// Fixed cost and potency regardless of stance.
    #[default]
    Neutral,
}

/// Stance mutation applied after potency has been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Effect {
    #[default]
    None,
    /// Raise the fire track, or cancel an active ice track.
    RaiseFire,
    /// Raise the ice track, or cancel an active fire track.
    RaiseIce,
    /// Move to the opposite track at the given level. No-op while neutral.
    Swap(u8),
    /// Jump straight to the maximum fire level.
    MaxFire,
    /// Jump straight to the maximum ice level.
    MaxIce,
}

/// Extra precondition checked alongside mana and cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    /// Fire track must be above zero.
    Burning,
    /// Ice track must be above zero.
    Chilled,
}

/// One entry of the action catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Unique key, also used for cooldown tracking.
    pub name: String,
    /// Mana cost before stance scaling.
    pub base_mana: u32,
    /// Fixed technique point cost.
    #[serde(default)]
    pub tp_cost: i32,
    pub category: ActionCategory,
    /// Level at which the action unlocks. Not enforced by the simulation.
    #[serde(default = "default_unlock_level")]
    pub unlock_level: u32,
    pub cooldown: f64,
    pub cast_time: f64,
    /// Potency before stance scaling.
    pub base_potency: f64,
    #[serde(default)]
    pub element: Element,
    #[serde(default)]
    pub effect: Effect,
    #[serde(default)]
    pub requirement: Option<Requirement>,
}

fn default_unlock_level() -> u32 {
    1
}
