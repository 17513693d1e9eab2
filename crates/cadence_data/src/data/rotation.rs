use super::action::ActionId;
use serde::{Deserialize, Serialize};

/// A candidate rotation: a fixed-length ordered list of catalog references.
///
/// The simulation only ever reads a rotation. Mutation and crossover are
/// provided by the search in `cadence_core::rotation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Rotation {
    pub genes: Vec<ActionId>,
}

impl Rotation {
    #[must_use]
    pub fn new(genes: Vec<ActionId>) -> Self {
        Self { genes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.genes.iter().copied()
    }
}

impl FromIterator<ActionId> for Rotation {
    fn from_iter<T: IntoIterator<Item = ActionId>>(iter: T) -> Self {
        Self {
            genes: iter.into_iter().collect(),
        }
    }
}
