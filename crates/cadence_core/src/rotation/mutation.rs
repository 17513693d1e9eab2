use cadence_data::Rotation;
use rand::Rng;

/// Twors mutation: two randomly chosen slots trade places.
pub fn twors_with_rng<R: Rng>(rotation: &mut Rotation, rng: &mut R) {
    let len = rotation.len();
    if len < 2 {
        return;
    }
    let a = rng.gen_range(0..len);
    let mut b = rng.gen_range(0..len - 1);
    if b >= a {
        b += 1;
    }
    rotation.genes.swap(a, b);
}
