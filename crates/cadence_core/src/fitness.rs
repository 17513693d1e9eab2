//! Deterministic fitness evaluation of a rotation.
//!
//! One evaluation walks the rotation slot by slot on a simulated clock:
//! due regeneration ticks are applied, the slot's action is cast if its
//! cooldown has expired and its costs can be paid, and the clock advances by
//! the cast time, or by the failure penalty when the cast is refused. The
//! score is potency per unit of time, or zero if the run never passed the
//! minimum runtime.
//!
//! Every evaluation owns its [`ResourceState`] and [`CooldownLedger`], so
//! evaluations of different rotations can run in parallel against one
//! shared [`Catalog`].

use crate::catalog::{ActionLogic, Catalog};
use crate::config::{SimConfig, TpPolicy};
use crate::error::{Result, SimError};
use crate::resources::ResourceState;
use cadence_data::{
    ActionDefinition, CastOutcome, FailureReason, Rotation, TraceEntry,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Time at which each action becomes available again, keyed by action name.
#[derive(Debug, Default, Clone)]
pub struct CooldownLedger<'a> {
    ready_at: HashMap<&'a str, f64>,
}

impl<'a> CooldownLedger<'a> {
    #[must_use]
    pub fn is_ready(&self, name: &str, now: f64) -> bool {
        self.ready_at.get(name).map_or(true, |&ready| ready <= now)
    }

    pub fn start(&mut self, name: &'a str, now: f64, cooldown: f64) {
        self.ready_at.insert(name, now + cooldown);
    }

    #[must_use]
    pub fn ready_at(&self, name: &str) -> Option<f64> {
        self.ready_at.get(name).copied()
    }
}

/// In-progress state of one evaluation.
///
/// The config is expected to have passed [`SimConfig::validate`]; a
/// non-positive tick interval would keep regeneration from ever catching up.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    config: &'a SimConfig,
    state: ResourceState,
    ledger: CooldownLedger<'a>,
    clock: f64,
    next_tick: f64,
    total_potency: f64,
}

impl<'a> Simulation<'a> {
    #[must_use]
    pub fn new(config: &'a SimConfig) -> Self {
        Self::with_state(config, ResourceState::new(config))
    }

    /// Starts from an arbitrary resource state, at time zero.
    #[must_use]
    pub fn with_state(config: &'a SimConfig, state: ResourceState) -> Self {
        Self {
            config,
            state,
            ledger: CooldownLedger::default(),
            clock: 0.0,
            next_tick: 0.0,
            total_potency: 0.0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    #[must_use]
    pub fn ledger(&self) -> &CooldownLedger<'a> {
        &self.ledger
    }

    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[must_use]
    pub fn total_potency(&self) -> f64 {
        self.total_potency
    }

    /// Moves the clock forward without casting. Ticks are applied lazily.
    pub fn advance_clock(&mut self, dt: f64) {
        self.clock += dt;
    }

    /// Applies every regeneration tick whose boundary the clock has passed.
    /// Returns the number of ticks processed, including suppressed ones.
    pub fn apply_due_ticks(&mut self) -> Result<u32> {
        let mut ticks = 0;
        while self.clock > self.next_tick {
            self.state.regen_tick(self.config.regen_policy)?;
            self.next_tick += self.config.mana_tick_interval;
            ticks += 1;
        }
        Ok(ticks)
    }

    /// Runs one rotation slot.
    pub fn step(&mut self, action: &'a ActionDefinition) -> Result<CastOutcome> {
        self.apply_due_ticks()?;

        let mana_cost = action.mana_cost(&self.state)?;
        match self.refusal(action, mana_cost) {
            Some(reason) => {
                self.clock += self.config.failure_penalty;
                Ok(CastOutcome::Failed(reason))
            }
            None => {
                self.state.spend(mana_cost, action.tp_cost);
                self.ledger.start(&action.name, self.clock, action.cooldown);

                let potency = action.potency(&self.state)?;
                self.total_potency += potency;
                action.apply_effect(&mut self.state);

                self.clock += action.cast_time;
                Ok(CastOutcome::Cast { potency })
            }
        }
    }

    fn refusal(&self, action: &ActionDefinition, mana_cost: u32) -> Option<FailureReason> {
        if !self.ledger.is_ready(&action.name, self.clock) {
            return Some(FailureReason::OnCooldown);
        }
        if !action.requirement_met(&self.state) {
            return Some(FailureReason::RequirementUnmet);
        }
        let (mana_ok, tp_ok) = self.state.can_afford(mana_cost, action.tp_cost);
        if !mana_ok {
            return Some(FailureReason::InsufficientMana);
        }
        if !tp_ok && self.config.tp_policy == TpPolicy::Gate {
            return Some(FailureReason::InsufficientTp);
        }
        None
    }

    /// Potency per unit time, or zero below the minimum runtime.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.clock > self.config.min_runtime {
            self.total_potency / self.clock
        } else {
            0.0
        }
    }
}

/// Full result of a traced evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: f64,
    pub total_potency: f64,
    pub elapsed: f64,
    pub casts: usize,
    pub failures: usize,
    pub trace: Vec<TraceEntry>,
}

/// Scores rotations against one catalog and one set of simulation constants.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    catalog: Arc<Catalog>,
    config: SimConfig,
}

impl FitnessEvaluator {
    /// Fails with [`SimError::Config`] if the simulation constants are invalid.
    pub fn new(catalog: Arc<Catalog>, config: SimConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SimError::config(e.to_string()))?;
        Ok(Self { catalog, config })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Rejects rotations of the wrong length or with unknown actions.
    pub fn validate(&self, rotation: &Rotation) -> Result<()> {
        if rotation.len() != self.config.rotation_length {
            return Err(SimError::MalformedRotation {
                expected: self.config.rotation_length,
                found: rotation.len(),
            });
        }
        let catalog_len = self.catalog.len();
        if let Some((slot, id)) = rotation
            .iter()
            .enumerate()
            .find(|(_, id)| id.index() >= catalog_len)
        {
            return Err(SimError::UnknownAction {
                slot,
                id,
                catalog_len,
            });
        }
        Ok(())
    }

    /// Scores a rotation. Higher is better.
    pub fn evaluate(&self, rotation: &Rotation) -> Result<f64> {
        let sim = self.run(rotation, |_| {})?;
        Ok(sim.score())
    }

    /// Scores a rotation and records every slot.
    pub fn trace(&self, rotation: &Rotation) -> Result<Evaluation> {
        let mut trace = Vec::with_capacity(rotation.len());
        let sim = self.run(rotation, |entry| trace.push(entry))?;
        let casts = trace.iter().filter(|e| e.outcome.is_cast()).count();
        Ok(Evaluation {
            score: sim.score(),
            total_potency: sim.total_potency(),
            elapsed: sim.clock(),
            casts,
            failures: trace.len() - casts,
            trace,
        })
    }

    fn run<F>(&self, rotation: &Rotation, mut record: F) -> Result<Simulation<'_>>
    where
        F: FnMut(TraceEntry),
    {
        self.validate(rotation)?;
        let mut sim = Simulation::new(&self.config);
        for (slot, id) in rotation.iter().enumerate() {
            let action = self.catalog.get(id).ok_or(SimError::UnknownAction {
                slot,
                id,
                catalog_len: self.catalog.len(),
            })?;
            let outcome = sim.step(action)?;
            tracing::trace!(
                slot,
                action = %action.name,
                potency = outcome.potency(),
                clock = sim.clock(),
                "Rotation slot"
            );
            record(TraceEntry {
                slot,
                action: action.name.clone(),
                outcome,
                total_potency: sim.total_potency(),
                elapsed: sim.clock(),
                resources: sim.state().snapshot(),
            });
        }
        Ok(sim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_data::{ActionCategory, ActionId, Effect, Element};

    fn instant(name: &str, base_mana: u32, cooldown: f64, cast_time: f64) -> ActionDefinition {
        ActionDefinition {
            name: name.to_string(),
            base_mana,
            tp_cost: 0,
            category: ActionCategory::InstantAbility,
            unlock_level: 1,
            cooldown,
            cast_time,
            base_potency: 100.0,
            element: Element::Neutral,
            effect: Effect::None,
            requirement: None,
        }
    }

    #[test]
    fn test_second_cast_on_cooldown_pays_penalty() {
        let config = SimConfig::default();
        let action = instant("Jolt", 0, 12.0, 0.75);
        let mut sim = Simulation::new(&config);

        assert_eq!(sim.step(&action).unwrap(), CastOutcome::Cast { potency: 100.0 });
        assert_eq!(sim.clock(), 0.75);
        assert_eq!(sim.ledger().ready_at("Jolt"), Some(12.0));

        assert_eq!(
            sim.step(&action).unwrap(),
            CastOutcome::Failed(FailureReason::OnCooldown)
        );
        assert_eq!(sim.clock(), 0.75 + config.failure_penalty);
        assert_eq!(sim.total_potency(), 100.0);
    }

    #[test]
    fn test_insufficient_mana_leaves_resources_untouched() {
        let config = SimConfig::default();
        let action = instant("Flare", 500, 0.0, 2.0);
        let mut sim = Simulation::with_state(
            &config,
            ResourceState::new(&config).with_mana(499),
        );
        assert_eq!(
            sim.step(&action).unwrap(),
            CastOutcome::Failed(FailureReason::InsufficientMana)
        );
        assert_eq!(sim.state().mana(), 499);
        assert_eq!(sim.ledger().ready_at("Flare"), None);
    }

    #[test]
    fn test_cooldown_expires_exactly_on_boundary() {
        let config = SimConfig::default();
        let action = instant("Jolt", 0, 5.0, 0.0);
        let mut sim = Simulation::new(&config);
        assert!(sim.step(&action).unwrap().is_cast());
        // Failure penalty equals the cooldown, so the ledger entry is due exactly now.
        assert!(!sim.step(&action).unwrap().is_cast());
        assert_eq!(sim.clock(), 5.0);
        assert!(sim.step(&action).unwrap().is_cast());
    }

    #[test]
    fn test_tp_policy() {
        let gated = SimConfig::default();
        let unchecked = SimConfig {
            tp_policy: TpPolicy::Unchecked,
            ..Default::default()
        };
        let mut action = instant("Heavy", 0, 0.0, 1.0);
        action.tp_cost = 60;

        let mut sim = Simulation::new(&gated);
        assert!(sim.step(&action).unwrap().is_cast());
        assert_eq!(
            sim.step(&action).unwrap(),
            CastOutcome::Failed(FailureReason::InsufficientTp)
        );
        assert_eq!(sim.state().tp(), 40);

        let mut sim = Simulation::new(&unchecked);
        assert!(sim.step(&action).unwrap().is_cast());
        assert!(sim.step(&action).unwrap().is_cast());
        assert_eq!(sim.state().tp(), -20);
    }

    #[test]
    fn test_regen_ticks_follow_clock() {
        let config = SimConfig::default();
        let mut sim = Simulation::with_state(
            &config,
            ResourceState::new(&config).with_mana(0),
        );
        assert_eq!(sim.apply_due_ticks().unwrap(), 0);
        sim.advance_clock(6.5);
        // Boundaries 0, 3 and 6 have all been passed.
        assert_eq!(sim.apply_due_ticks().unwrap(), 3);
        assert_eq!(sim.state().mana(), 3 * 43);
    }

    #[test]
    fn test_potency_uses_post_cost_pre_effect_state() {
        let config = SimConfig::default();
        let catalog = Catalog::standard();
        let fire = catalog.get(catalog.find("Fire").unwrap()).unwrap();
        let mut sim = Simulation::new(&config);

        assert_eq!(sim.step(fire).unwrap(), CastOutcome::Cast { potency: 180.0 });
        assert_eq!(sim.state().fire(), 1);
        assert_eq!(sim.state().mana(), 2156 - 167);

        let second = sim.step(fire).unwrap();
        assert!((second.potency() - 252.0).abs() < 1e-9);
        assert_eq!(sim.state().mana(), 2156 - 167 - 334);
    }

    #[test]
    fn test_validate_rotation() {
        let config = SimConfig {
            rotation_length: 3,
            ..Default::default()
        };
        let evaluator = FitnessEvaluator::new(Arc::new(Catalog::standard()), config).unwrap();

        let short = Rotation::new(vec![ActionId(0); 2]);
        assert_eq!(
            evaluator.evaluate(&short),
            Err(SimError::MalformedRotation {
                expected: 3,
                found: 2
            })
        );

        let unknown = Rotation::new(vec![ActionId(0), ActionId(9), ActionId(1)]);
        assert_eq!(
            evaluator.evaluate(&unknown),
            Err(SimError::UnknownAction {
                slot: 1,
                id: ActionId(9),
                catalog_len: 4
            })
        );
    }

    #[test]
    fn test_evaluator_rejects_zero_tick_interval() {
        let config = SimConfig {
            mana_tick_interval: 0.0,
            rotation_length: 2,
            ..Default::default()
        };
        let result = FitnessEvaluator::new(Arc::new(Catalog::standard()), config);
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn test_trace_matches_evaluate() {
        let config = SimConfig::default();
        let evaluator = FitnessEvaluator::new(Arc::new(Catalog::standard()), config).unwrap();
        let rotation: Rotation = (0..100).map(|i| ActionId(i % 4)).collect();

        let score = evaluator.evaluate(&rotation).unwrap();
        let evaluation = evaluator.trace(&rotation).unwrap();
        assert_eq!(score.to_bits(), evaluation.score.to_bits());
        assert_eq!(evaluation.trace.len(), 100);
        assert_eq!(evaluation.casts + evaluation.failures, 100);
        let last = evaluation.trace.last().unwrap();
        assert_eq!(last.elapsed, evaluation.elapsed);
        assert_eq!(last.total_potency, evaluation.total_potency);
    }
}
