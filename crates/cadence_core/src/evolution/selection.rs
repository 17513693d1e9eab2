use super::Scored;

/// Elite selection: the `count` fittest individuals, best first.
///
/// Ties keep their population order, so selection is deterministic.
#[must_use]
pub fn elite(population: &[Scored], count: usize) -> Vec<Scored> {
    let mut ranked = population.to_vec();
    sort_by_fitness(&mut ranked);
    ranked.truncate(count);
    ranked
}

/// Sorts best first. NaN scores sink to the end.
pub fn sort_by_fitness(population: &mut [Scored]) {
    population.sort_by(|a, b| rank_key(b.fitness).total_cmp(&rank_key(a.fitness)));
}

fn rank_key(fitness: f64) -> f64 {
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}
