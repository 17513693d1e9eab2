pub mod crossover;
pub mod mutation;

use crate::catalog::Catalog;
pub use cadence_data::{ActionId, Rotation};
use rand::Rng;

/// Genetic operations on a rotation. The simulation never calls these.
pub trait RotationLogic {
    /// A rotation of `length` slots, each drawn uniformly from the catalog.
    fn new_random_with_rng<R: Rng>(length: usize, catalog: &Catalog, rng: &mut R) -> Self;
    /// Builds a rotation from action names, failing on the first unknown name.
    fn from_names<S: AsRef<str>>(names: &[S], catalog: &Catalog) -> anyhow::Result<Self>
    where
        Self: Sized;
    fn names<'c>(&self, catalog: &'c Catalog) -> Vec<&'c str>;
    fn crossover_with_rng<R: Rng>(&self, other: &Rotation, rng: &mut R) -> (Rotation, Rotation);
    fn mutate_with_rng<R: Rng>(&mut self, rng: &mut R);
}

impl RotationLogic for Rotation {
    fn new_random_with_rng<R: Rng>(length: usize, catalog: &Catalog, rng: &mut R) -> Self {
        (0..length)
            .map(|_| ActionId(rng.gen_range(0..catalog.len())))
            .collect()
    }

    fn from_names<S: AsRef<str>>(names: &[S], catalog: &Catalog) -> anyhow::Result<Self> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                catalog
                    .find(name)
                    .ok_or_else(|| anyhow::anyhow!("unknown action '{name}'"))
            })
            .collect()
    }

    fn names<'c>(&self, catalog: &'c Catalog) -> Vec<&'c str> {
        self.iter()
            .map(|id| catalog.get(id).map_or("?", |a| a.name.as_str()))
            .collect()
    }

    fn crossover_with_rng<R: Rng>(&self, other: &Rotation, rng: &mut R) -> (Rotation, Rotation) {
        crossover::two_point_with_rng(self, other, rng)
    }

    fn mutate_with_rng<R: Rng>(&mut self, rng: &mut R) {
        mutation::twors_with_rng(self, rng);
    }
}
