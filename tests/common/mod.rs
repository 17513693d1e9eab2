pub mod macros;

use cadence_lib::model::catalog::Catalog;
use cadence_lib::model::config::SimConfig;
use cadence_lib::model::data::{
    ActionCategory, ActionDefinition, ActionId, Effect, Element, Rotation,
};
use cadence_lib::model::fitness::FitnessEvaluator;
use std::sync::Arc;

#[allow(dead_code)]
pub struct EvaluatorBuilder {
    config: SimConfig,
    actions: Vec<ActionDefinition>,
}

#[allow(dead_code)]
impl EvaluatorBuilder {
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
            actions: Vec::new(),
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_action(mut self, action: ActionDefinition) -> Self {
        self.actions.push(action);
        self
    }

    /// Uses the preset catalog named in the config when no action was added.
    pub fn build(self) -> FitnessEvaluator {
        let catalog = if self.actions.is_empty() {
            Catalog::from_preset(self.config.catalog)
        } else {
            Catalog::new(self.actions).expect("test catalog should be valid")
        };
        FitnessEvaluator::new(Arc::new(catalog), self.config).expect("test config should be valid")
    }
}

/// A stance-neutral instant action with the given timings.
#[allow(dead_code)]
pub fn neutral_action(name: &str, base_mana: u32, cooldown: f64, cast_time: f64, potency: f64) -> ActionDefinition {
    ActionDefinition {
        name: name.to_string(),
        base_mana,
        tp_cost: 0,
        category: ActionCategory::InstantAbility,
        unlock_level: 1,
        cooldown,
        cast_time,
        base_potency: potency,
        element: Element::Neutral,
        effect: Effect::None,
        requirement: None,
    }
}

#[allow(dead_code)]
pub fn repeat(id: usize, length: usize) -> Rotation {
    Rotation::new(vec![ActionId(id); length])
}

/// Looks up actions by name in the evaluator's catalog.
#[allow(dead_code)]
pub fn rotation_of(evaluator: &FitnessEvaluator, names: &[&str]) -> Rotation {
    names
        .iter()
        .map(|name| {
            evaluator
                .catalog()
                .find(name)
                .unwrap_or_else(|| panic!("no action named {name}"))
        })
        .collect()
}
