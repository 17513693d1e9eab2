use cadence_data::Rotation;
use rand::Rng;

/// Two-point crossover: the slots between two cut points are exchanged.
///
/// Both parents must have the same length. Rotations shorter than three
/// slots have no interior cut points and are returned unchanged.
pub fn two_point_with_rng<R: Rng>(
    parent: &Rotation,
    other: &Rotation,
    rng: &mut R,
) -> (Rotation, Rotation) {
    debug_assert_eq!(parent.len(), other.len());
    let len = parent.len().min(other.len());
    if len < 3 {
        return (parent.clone(), other.clone());
    }

    let first = rng.gen_range(1..len - 1);
    let second = rng.gen_range(first + 1..len);

    let mut child_a = parent.clone();
    let mut child_b = other.clone();
    child_a.genes[first..second].copy_from_slice(&other.genes[first..second]);
    child_b.genes[first..second].copy_from_slice(&parent.genes[first..second]);
    (child_a, child_b)
}
