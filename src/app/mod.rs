pub mod report;

pub use report::Report;

use crate::model::catalog::Catalog;
use crate::model::config::AppConfig;
use crate::model::evolution::GeneticSearch;
use crate::model::fitness::FitnessEvaluator;
use crate::model::rotation::{Rotation, RotationLogic};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// A configured catalog and evaluator, ready to search or score rotations.
pub struct App {
    pub config: AppConfig,
    catalog: Arc<Catalog>,
    evaluator: FitnessEvaluator,
}

impl App {
    /// Uses `catalog` if given, otherwise the preset named in the config.
    pub fn new(config: AppConfig, catalog: Option<Catalog>) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        let catalog = Arc::new(catalog.unwrap_or_else(|| Catalog::from_preset(config.sim.catalog)));
        let evaluator = FitnessEvaluator::new(Arc::clone(&catalog), config.sim.clone())?;
        tracing::debug!(
            actions = catalog.len(),
            fingerprint = %config.fingerprint(),
            "App configured"
        );
        Ok(Self {
            config,
            catalog,
            evaluator,
        })
    }

    /// Loads the config file (defaults if absent) and an optional catalog file.
    pub fn from_paths(config_path: &Path, catalog_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path)
            .with_context(|| format!("loading config from {}", config_path.display()))?;
        let catalog = catalog_path
            .map(|path| -> Result<Catalog> {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading catalog {}", path.display()))?;
                Catalog::from_toml(&content)
                    .with_context(|| format!("parsing catalog {}", path.display()))
            })
            .transpose()?;
        Self::new(config, catalog)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Runs the genetic search and reports its best rotation.
    pub fn search(&self) -> Result<Report> {
        let search = GeneticSearch::new(
            &self.evaluator,
            self.config.evolution.clone(),
            &self.catalog,
            self.config.sim.rotation_length,
        )?;
        let outcome = search.run()?;
        let evaluation = self.evaluator.trace(&outcome.best.rotation)?;
        Ok(Report::from_search(self, &outcome, evaluation))
    }

    /// Scores a hand-written rotation. The names are repeated in order until
    /// the configured rotation length is filled.
    pub fn evaluate_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Report> {
        anyhow::ensure!(!names.is_empty(), "rotation must name at least one action");
        let pattern = Rotation::from_names(names, &self.catalog)?;
        let rotation: Rotation = pattern
            .genes
            .iter()
            .copied()
            .cycle()
            .take(self.config.sim.rotation_length.max(pattern.len()))
            .collect();
        let evaluation = self.evaluator.trace(&rotation)?;
        Ok(Report::from_evaluation(self, &rotation, evaluation))
    }
}
