//! # Cadence Core
//!
//! The deterministic engine behind the Cadence rotation search.
//!
//! This crate contains:
//! - The actor's resource state: two exclusive stance tracks, mana, technique points
//! - The action catalog with its stance-dependent cost and potency tables
//! - The time-stepped fitness evaluation of a rotation
//! - Genetic operators and the search driving them
//!
//! ## Architecture
//!
//! A [`Catalog`] is built once and shared read-only. Every evaluation gets a
//! fresh [`ResourceState`] and cooldown ledger, so the search can score a
//! whole generation in parallel on the Rayon pool while staying bit-for-bit
//! reproducible for a given seed.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use cadence_core::{Catalog, FitnessEvaluator, RotationLogic};
//! use cadence_core::config::SimConfig;
//! use cadence_data::Rotation;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let catalog = Arc::new(Catalog::standard());
//! let evaluator = FitnessEvaluator::new(Arc::clone(&catalog), SimConfig::default()).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let rotation = Rotation::new_random_with_rng(100, &catalog, &mut rng);
//! let score = evaluator.evaluate(&rotation).unwrap();
//! assert!(score >= 0.0);
//! ```

/// Action catalog and cost/potency tables
pub mod catalog;
/// Configuration management for simulation and search parameters
pub mod config;
/// Error types
pub mod error;
/// Genetic search over rotations
pub mod evolution;
/// Time-stepped fitness evaluation
pub mod fitness;
/// Search counters and logging setup
pub mod metrics;
/// Resource and stance state machine
pub mod resources;
/// Random construction, crossover and mutation of rotations
pub mod rotation;

pub use catalog::{ActionLogic, Catalog};
pub use error::{Result, SimError};
pub use evolution::{Fitness, GeneticSearch, Scored, SearchOutcome, Termination};
pub use fitness::{CooldownLedger, Evaluation, FitnessEvaluator, Simulation};
pub use metrics::{init_logging, SearchMetrics};
pub use resources::ResourceState;
pub use rotation::RotationLogic;
