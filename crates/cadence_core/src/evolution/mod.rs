//! Genetic search over rotations.
//!
//! Each generation selects the fittest `min_population` rotations as
//! parents, pairs them for two-point crossover, applies twors mutation to
//! the offspring, scores the offspring and reinserts the best parents if the
//! offspring alone cannot fill the population. Given a seed the whole search
//! is reproducible, including when scoring runs on the rayon pool.

pub mod reinsertion;
pub mod selection;

use crate::catalog::Catalog;
use crate::config::EvolutionConfig;
use crate::error::Result;
use crate::fitness::FitnessEvaluator;
use crate::metrics::SearchMetrics;
use crate::rotation::RotationLogic;
use cadence_data::Rotation;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scores rotations for the search. Higher is better.
pub trait Fitness: Sync {
    fn evaluate(&self, rotation: &Rotation) -> Result<f64>;
}

impl Fitness for FitnessEvaluator {
    fn evaluate(&self, rotation: &Rotation) -> Result<f64> {
        FitnessEvaluator::evaluate(self, rotation)
    }
}

/// A rotation together with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored {
    pub rotation: Rotation,
    pub fitness: f64,
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    GenerationLimit,
    Stagnation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best: Scored,
    pub generations: u64,
    pub evaluations: u64,
    pub termination: Termination,
    #[serde(skip)]
    pub elapsed: Duration,
}

pub struct GeneticSearch<'f, F: Fitness> {
    fitness: &'f F,
    config: EvolutionConfig,
    rng: ChaCha8Rng,
    population: Vec<Scored>,
    best: Scored,
    generation: u64,
    stagnant_generations: u64,
    metrics: SearchMetrics,
}

impl<'f, F: Fitness> GeneticSearch<'f, F> {
    /// Seeds and scores an initial population of `min_population` random rotations.
    pub fn new(
        fitness: &'f F,
        config: EvolutionConfig,
        catalog: &Catalog,
        rotation_length: usize,
    ) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        tracing::info!(seed, population = config.min_population, "Starting genetic search");

        let initial: Vec<Rotation> = (0..config.min_population)
            .map(|_| Rotation::new_random_with_rng(rotation_length, catalog, &mut rng))
            .collect();
        let metrics = SearchMetrics::new(config.log_interval);
        let population = score_all(fitness, initial, &metrics)?;
        let best = selection::elite(&population, 1)
            .pop()
            .unwrap_or_else(|| Scored {
                rotation: Rotation::default(),
                fitness: f64::NEG_INFINITY,
            });

        Ok(Self {
            fitness,
            config,
            rng,
            population,
            best,
            generation: 0,
            stagnant_generations: 0,
            metrics,
        })
    }

    #[must_use]
    pub fn population(&self) -> &[Scored] {
        &self.population
    }

    #[must_use]
    pub fn best(&self) -> &Scored {
        &self.best
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Produces and scores one generation.
    pub fn step(&mut self) -> Result<()> {
        let parents = selection::elite(&self.population, self.config.min_population);

        let mut offspring = Vec::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            if self.rng.gen::<f32>() < self.config.crossover_probability {
                let (a, b) = pair[0]
                    .rotation
                    .crossover_with_rng(&pair[1].rotation, &mut self.rng);
                offspring.push(a);
                offspring.push(b);
            }
        }
        for child in &mut offspring {
            if self.rng.gen::<f32>() < self.config.mutation_probability {
                child.mutate_with_rng(&mut self.rng);
            }
        }

        let scored = score_all(self.fitness, offspring, &self.metrics)?;
        self.population = reinsertion::elitist(
            scored,
            &parents,
            self.config.min_population,
            self.config.max_population,
        );
        self.generation += 1;

        let leader = selection::elite(&self.population, 1);
        match leader.into_iter().next() {
            Some(leader) if leader.fitness > self.best.fitness => {
                self.best = leader;
                self.stagnant_generations = 0;
            }
            _ => self.stagnant_generations += 1,
        }

        let mean = self.population.iter().map(|s| s.fitness).sum::<f64>()
            / self.population.len().max(1) as f64;
        self.metrics
            .record_generation(self.best.fitness, mean, self.population.len());
        Ok(())
    }

    fn termination(&self) -> Option<Termination> {
        if self.generation >= self.config.generations {
            return Some(Termination::GenerationLimit);
        }
        match self.config.stagnation_limit {
            Some(limit) if self.stagnant_generations >= limit => Some(Termination::Stagnation),
            _ => None,
        }
    }

    /// Steps until a termination criterion is met.
    pub fn run(mut self) -> Result<SearchOutcome> {
        let termination = loop {
            if let Some(reason) = self.termination() {
                break reason;
            }
            self.step()?;
        };
        tracing::info!(
            generations = self.generation,
            best = self.best.fitness,
            evaluations = self.metrics.evaluation_count(),
            ?termination,
            "Genetic search finished"
        );
        Ok(SearchOutcome {
            best: self.best,
            generations: self.generation,
            evaluations: self.metrics.evaluation_count(),
            termination,
            elapsed: self.metrics.elapsed(),
        })
    }
}

fn score_all<F: Fitness>(
    fitness: &F,
    rotations: Vec<Rotation>,
    metrics: &SearchMetrics,
) -> Result<Vec<Scored>> {
    metrics.record_evaluations(rotations.len());

    #[cfg(feature = "std")]
    let iter = rotations.into_par_iter();
    #[cfg(not(feature = "std"))]
    let iter = rotations.into_iter();

    iter.map(|rotation| -> Result<Scored> {
        let fitness = fitness.evaluate(&rotation)?;
        Ok(Scored { rotation, fitness })
    })
    .collect()
}
