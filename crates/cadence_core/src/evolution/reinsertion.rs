use super::selection::sort_by_fitness;
use super::Scored;

/// Elitist reinsertion: offspring first, topped up with the best parents
/// until the population reaches `min_size`, then capped at `max_size`.
///
/// [`GeneticSearch`](super::GeneticSearch) produces at most one child per
/// parent, so its generations always settle at exactly `min_size`; the cap
/// only bites for callers that breed larger offspring sets.
#[must_use]
pub fn elitist(
    mut offspring: Vec<Scored>,
    parents: &[Scored],
    min_size: usize,
    max_size: usize,
) -> Vec<Scored> {
    if offspring.len() < min_size {
        let mut best_parents = parents.to_vec();
        sort_by_fitness(&mut best_parents);
        let missing = min_size - offspring.len();
        offspring.extend(best_parents.into_iter().take(missing));
    }
    if offspring.len() > max_size {
        sort_by_fitness(&mut offspring);
        offspring.truncate(max_size);
    }
    offspring
}
