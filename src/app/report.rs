//! Human and JSON renderings of an evaluated rotation.

use super::App;
use crate::model::catalog::Catalog;
use crate::model::data::{CastOutcome, FailureReason, Rotation, TraceEntry};
use crate::model::evolution::{SearchOutcome, Termination};
use crate::model::fitness::Evaluation;
use crate::model::rotation::RotationLogic;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Search statistics attached to a report produced by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub generations: u64,
    pub evaluations: u64,
    pub termination: Termination,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Digest of the configuration that produced this score.
    pub fingerprint: String,
    pub score: f64,
    pub total_potency: f64,
    pub elapsed: f64,
    pub casts: usize,
    pub failures: usize,
    pub rotation: Vec<String>,
    pub search: Option<SearchSummary>,
    pub trace: Vec<TraceEntry>,
}

impl Report {
    pub(crate) fn from_search(app: &App, outcome: &SearchOutcome, evaluation: Evaluation) -> Self {
        let mut report = Self::from_evaluation(app, &outcome.best.rotation, evaluation);
        report.search = Some(SearchSummary {
            generations: outcome.generations,
            evaluations: outcome.evaluations,
            termination: outcome.termination,
            elapsed_ms: outcome.elapsed.as_millis() as u64,
        });
        report
    }

    pub(crate) fn from_evaluation(app: &App, rotation: &Rotation, evaluation: Evaluation) -> Self {
        Self {
            fingerprint: app.config.fingerprint(),
            score: evaluation.score,
            total_potency: evaluation.total_potency,
            elapsed: evaluation.elapsed,
            casts: evaluation.casts,
            failures: evaluation.failures,
            rotation: rotation
                .names(app.catalog())
                .into_iter()
                .map(str::to_string)
                .collect(),
            search: None,
            trace: evaluation.trace,
        }
    }

    /// One line per slot, then the totals.
    #[must_use]
    pub fn render_trace(&self) -> String {
        let mut out = String::new();
        for entry in &self.trace {
            let r = &entry.resources;
            let outcome = match entry.outcome {
                CastOutcome::Cast { potency } => format!("+{potency:.0}"),
                CastOutcome::Failed(reason) => format!("failed ({})", describe(reason)),
            };
            let _ = writeln!(
                out,
                "{:>7.2}s  {:<14} {:<26} = {:>8.0}; MP: {:4}, TP: {:4}, Fire: {}, Ice: {}",
                entry.elapsed, entry.action, outcome, entry.total_potency, r.mana, r.tp, r.fire, r.ice
            );
        }
        let _ = writeln!(
            out,
            "{:.0} potency / {:.2} time = {:.4}",
            self.total_potency, self.elapsed, self.score
        );
        if let Some(search) = &self.search {
            let _ = writeln!(
                out,
                "{} generations, {} evaluations, {:?} after {} ms",
                search.generations, search.evaluations, search.termination, search.elapsed_ms
            );
        }
        out
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing report {}", path.display()))
    }
}

fn describe(reason: FailureReason) -> &'static str {
    match reason {
        FailureReason::OnCooldown => "on cooldown",
        FailureReason::InsufficientMana => "not enough mana",
        FailureReason::InsufficientTp => "not enough TP",
        FailureReason::RequirementUnmet => "requirement unmet",
    }
}

/// Table of the catalog's actions.
#[must_use]
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} {:<14} {:<15} {:>5} {:>6} {:>4} {:>8} {:>6} {:>8}  {:?}",
        "#", "Name", "Category", "Level", "Mana", "TP", "Cooldown", "Cast", "Potency", "Effect"
    );
    for (id, action) in catalog.iter() {
        let _ = writeln!(
            out,
            "{:<3} {:<14} {:<15} {:>5} {:>6} {:>4} {:>8.2} {:>6.2} {:>8.1}  {:?}",
            id.index(),
            action.name,
            format!("{:?}", action.category),
            action.unlock_level,
            action.base_mana,
            action.tp_cost,
            action.cooldown,
            action.cast_time,
            action.base_potency,
            action.effect
        );
    }
    out
}
