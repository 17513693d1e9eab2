//! The action catalog and its stance-dependent cost and potency tables.
//!
//! A catalog is built once, validated, and then only read. Evaluations share
//! it behind an `Arc`.

use crate::config::CatalogPreset;
use crate::error::{Result, SimError};
use crate::resources::ResourceState;
use cadence_data::{
    ActionCategory, ActionDefinition, ActionId, Effect, Element, Requirement,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mana divisor for an element cast from the opposite stance, indexed by level.
const OPPOSITE_STANCE_COST_DIVISOR: [u32; 4] = [1, 2, 4, 4];
/// Potency multiplier for an element cast from the opposite stance, indexed by level.
const OPPOSITE_STANCE_POTENCY: [f64; 4] = [1.0, 0.9, 0.8, 0.7];
/// Fire potency multiplier while burning, indexed by fire level.
const BURNING_FIRE_POTENCY: [f64; 4] = [1.0, 1.4, 1.6, 1.8];
/// Fire costs this many times its base while burning.
const BURNING_FIRE_COST_FACTOR: u32 = 2;

/// Stance-aware behaviour of a catalog entry.
pub trait ActionLogic {
    /// Mana required right now.
    fn mana_cost(&self, state: &ResourceState) -> Result<u32>;
    /// Potency dealt, read after costs are paid and before the effect applies.
    fn potency(&self, state: &ResourceState) -> Result<f64>;
    fn apply_effect(&self, state: &mut ResourceState);
    fn requirement_met(&self, state: &ResourceState) -> bool;
}

impl ActionLogic for ActionDefinition {
    fn mana_cost(&self, state: &ResourceState) -> Result<u32> {
        let base = self.base_mana;
        match self.element {
            Element::Neutral => Ok(base),
            Element::Fire => {
                let fire = state.fire_level()?;
                let ice = state.ice_level()?;
                if fire > 0 {
                    Ok(base.saturating_mul(BURNING_FIRE_COST_FACTOR))
                } else {
                    Ok(base / OPPOSITE_STANCE_COST_DIVISOR[usize::from(ice)])
                }
            }
            Element::Ice => {
                let fire = state.fire_level()?;
                let ice = state.ice_level()?;
                if ice > 0 {
                    Ok(base)
                } else {
                    Ok(base / OPPOSITE_STANCE_COST_DIVISOR[usize::from(fire)])
                }
            }
        }
    }

    fn potency(&self, state: &ResourceState) -> Result<f64> {
        let base = self.base_potency;
        match self.element {
            Element::Neutral => Ok(base),
            Element::Fire => {
                let fire = state.fire_level()?;
                let ice = state.ice_level()?;
                if fire > 0 {
                    Ok(base * BURNING_FIRE_POTENCY[usize::from(fire)])
                } else {
                    Ok(base * OPPOSITE_STANCE_POTENCY[usize::from(ice)])
                }
            }
            Element::Ice => {
                let fire = state.fire_level()?;
                let ice = state.ice_level()?;
                if ice > 0 {
                    Ok(base)
                } else {
                    Ok(base * OPPOSITE_STANCE_POTENCY[usize::from(fire)])
                }
            }
        }
    }

    fn apply_effect(&self, state: &mut ResourceState) {
        match self.effect {
            Effect::None => {}
            Effect::RaiseFire => state.raise_fire(),
            Effect::RaiseIce => state.raise_ice(),
            Effect::Swap(level) => state.swap(level),
            Effect::MaxFire => state.set_max_fire(),
            Effect::MaxIce => state.set_max_ice(),
        }
    }

    fn requirement_met(&self, state: &ResourceState) -> bool {
        match self.requirement {
            None => true,
            Some(Requirement::Burning) => state.is_burning(),
            Some(Requirement::Chilled) => state.is_chilled(),
        }
    }
}

/// Immutable, ordered set of actions a rotation may reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    actions: Vec<ActionDefinition>,
}

#[derive(Deserialize)]
struct CatalogFile {
    actions: Vec<ActionDefinition>,
}

impl Catalog {
    /// Validates and wraps a list of actions.
    pub fn new(actions: Vec<ActionDefinition>) -> Result<Self> {
        if actions.is_empty() {
            return Err(SimError::config("catalog must contain at least one action"));
        }
        let mut names = HashSet::new();
        for action in &actions {
            if !names.insert(action.name.as_str()) {
                return Err(SimError::config(format!(
                    "duplicate action name '{}'",
                    action.name
                )));
            }
            if action.tp_cost < 0 {
                return Err(SimError::config(format!(
                    "action '{}' has negative tp_cost {}",
                    action.name, action.tp_cost
                )));
            }
            for (field, value) in [
                ("cooldown", action.cooldown),
                ("cast_time", action.cast_time),
                ("base_potency", action.base_potency),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(SimError::config(format!(
                        "action '{}' has invalid {field} {value}",
                        action.name
                    )));
                }
            }
        }
        Ok(Self { actions })
    }

    /// Parses a catalog from TOML made of `[[actions]]` tables.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.actions)?)
    }

    #[must_use]
    pub fn from_preset(preset: CatalogPreset) -> Self {
        match preset {
            CatalogPreset::Standard => Self::standard(),
            CatalogPreset::Extended => Self::extended(),
        }
    }

    /// Blizzard, Fire, Transpose and Scathe.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            actions: standard_actions(),
        }
    }

    /// The standard set plus the third-tier spells and Fire IV.
    #[must_use]
    pub fn extended() -> Self {
        let mut actions = standard_actions();
        actions.extend(extended_actions());
        Self { actions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&ActionDefinition> {
        self.actions.get(id.index())
    }

    /// Looks an action up by name, case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ActionId> {
        self.actions
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))
            .map(ActionId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionDefinition)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(i, a)| (ActionId(i), a))
    }

    pub fn ids(&self) -> impl Iterator<Item = ActionId> {
        (0..self.actions.len()).map(ActionId)
    }
}

fn spell(
    name: &str,
    base_mana: u32,
    unlock_level: u32,
    cast_time: f64,
    base_potency: f64,
    element: Element,
    effect: Effect,
) -> ActionDefinition {
    ActionDefinition {
        name: name.to_string(),
        base_mana,
        tp_cost: 0,
        category: ActionCategory::Spell,
        unlock_level,
        cooldown: 2.5,
        cast_time,
        base_potency,
        element,
        effect,
        requirement: None,
    }
}

fn standard_actions() -> Vec<ActionDefinition> {
    vec![
        spell("Blizzard", 66, 1, 2.5, 180.0, Element::Ice, Effect::RaiseIce),
        spell("Fire", 167, 2, 2.5, 180.0, Element::Fire, Effect::RaiseFire),
        ActionDefinition {
            name: "Transpose".to_string(),
            base_mana: 0,
            tp_cost: 0,
            category: ActionCategory::InstantAbility,
            unlock_level: 4,
            cooldown: 12.0,
            cast_time: 0.75,
            base_potency: 0.0,
            element: Element::Neutral,
            effect: Effect::Swap(1),
            requirement: None,
        },
        ActionDefinition {
            name: "Scathe".to_string(),
            base_mana: 143,
            tp_cost: 0,
            category: ActionCategory::InstantAbility,
            unlock_level: 15,
            cooldown: 2.5,
            cast_time: 2.5,
            // 100 at 80%, 200 at 20%
            base_potency: 120.0,
            element: Element::Neutral,
            effect: Effect::None,
            requirement: None,
        },
    ]
}

fn extended_actions() -> Vec<ActionDefinition> {
    vec![
        spell("Fire III", 333, 35, 3.5, 240.0, Element::Fire, Effect::MaxFire),
        spell("Blizzard III", 200, 35, 3.5, 240.0, Element::Ice, Effect::MaxIce),
        ActionDefinition {
            requirement: Some(Requirement::Burning),
            ..spell("Fire IV", 167, 60, 2.8, 260.0, Element::Fire, Effect::None)
        },
    ]
}
