//! Configuration management for simulation and search parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `cadence.toml` file. Every field has a default, so a file only needs the
//! values it overrides.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `cadence.toml` file (overrides defaults)
//! 3. Command line flags (seed and generation count only)
//!
//! ## Example `cadence.toml`
//!
//! ```toml
//! [sim]
//! max_stance_level = 1
//! regen_policy = "SuppressWhileBurning"
//! catalog = "Extended"
//!
//! [evolution]
//! generations = 2000
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Highest stance level any cost or potency table defines.
pub const TABLE_MAX_STANCE: u8 = 3;

/// How passive mana regeneration interacts with the fire stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RegenPolicy {
    /// No mana is regenerated on ticks that land while the fire track is active.
    #[default]
    SuppressWhileBurning,
    /// Ticks regenerate the flat base amount even while burning.
    Legacy,
}

/// How technique point costs are charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TpPolicy {
    /// A cast fails if the actor cannot pay its technique point cost.
    #[default]
    Gate,
    /// The cost is always deducted and the pool may go negative.
    Unchecked,
}

/// Which built-in action catalog a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CatalogPreset {
    /// Blizzard, Fire, Transpose, Scathe.
    #[default]
    Standard,
    /// Standard plus Fire III, Blizzard III and Fire IV.
    Extended,
}

/// Parameters of a single fitness evaluation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub max_mana: u32,
    pub max_tp: i32,
    /// Cap of both stance tracks, in `1..=3`.
    pub max_stance_level: u8,
    /// Seconds between passive regeneration ticks.
    pub mana_tick_interval: f64,
    /// Runs whose clock does not pass this value score zero.
    pub min_runtime: f64,
    /// Clock advance for a slot whose action could not be used.
    pub failure_penalty: f64,
    /// Number of slots in every candidate.
    pub rotation_length: usize,
    pub regen_policy: RegenPolicy,
    pub tp_policy: TpPolicy,
    pub catalog: CatalogPreset,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_mana: 2156,
            max_tp: 100,
            max_stance_level: 3,
            mana_tick_interval: 3.0,
            min_runtime: 60.0,
            failure_penalty: 5.0,
            rotation_length: 100,
            regen_policy: RegenPolicy::SuppressWhileBurning,
            tp_policy: TpPolicy::Gate,
            catalog: CatalogPreset::Standard,
        }
    }
}

/// Parameters of the genetic search driving the evaluations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of parents selected, and floor of every generation.
    pub min_population: usize,
    /// Ceiling of every generation after reinsertion. Crossover yields at
    /// most one child per parent, so `GeneticSearch` never reaches it; it
    /// bounds callers that feed `reinsertion::elitist` larger offspring sets.
    pub max_population: usize,
    pub generations: u64,
    pub crossover_probability: f32,
    pub mutation_probability: f32,
    /// Stop early after this many generations without improvement.
    pub stagnation_limit: Option<u64>,
    pub seed: Option<u64>,
    /// Generations between progress log lines.
    pub log_interval: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            min_population: 50,
            max_population: 70,
            generations: 10_000,
            crossover_probability: 0.75,
            mutation_probability: 0.1,
            stagnation_limit: None,
            seed: None,
            log_interval: 500,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub evolution: EvolutionConfig,
}

impl SimConfig {
    /// Validates the simulation constants. Every evaluation relies on these
    /// to terminate and to keep resources inside their bounds.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.max_mana > 0, "Max mana must be positive");
        anyhow::ensure!(self.max_tp >= 0, "Max TP must be non-negative");
        anyhow::ensure!(
            (1..=TABLE_MAX_STANCE).contains(&self.max_stance_level),
            "Max stance level must be in [1, {TABLE_MAX_STANCE}]"
        );
        anyhow::ensure!(
            self.mana_tick_interval.is_finite() && self.mana_tick_interval > 0.0,
            "Mana tick interval must be positive"
        );
        anyhow::ensure!(
            self.min_runtime.is_finite() && self.min_runtime >= 0.0,
            "Minimum runtime must be non-negative"
        );
        anyhow::ensure!(
            self.failure_penalty.is_finite() && self.failure_penalty >= 0.0,
            "Failure penalty must be non-negative"
        );
        anyhow::ensure!(self.rotation_length > 0, "Rotation length must be positive");
        Ok(())
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.sim.validate()?;

        let evo = &self.evolution;
        anyhow::ensure!(
            evo.min_population >= 2,
            "Minimum population must be at least 2"
        );
        anyhow::ensure!(
            evo.max_population >= evo.min_population,
            "Maximum population must not be below minimum population"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&evo.crossover_probability),
            "Crossover probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&evo.mutation_probability),
            "Mutation probability must be in [0.0, 1.0]"
        );
        anyhow::ensure!(evo.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist. A file that exists but fails to parse or validate is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Stable digest of every parameter that influences scores.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.sim).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}
