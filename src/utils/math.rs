//! Additional math helpers layered on top of `glam`.

use glam::DVec3;
use rand::Rng;

/// Draws a random direction by normalizing a uniform sample from the unit
/// cube. Degenerate (near-zero) draws fall back to +X so the result is
/// always unit length.
pub fn random_unit_vector(rng: &mut impl Rng) -> DVec3 {
    let v = DVec3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    );
    if v.length() < 1e-9 {
        return DVec3::X;
    }
    v.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_unit_vector_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let v = random_unit_vector(&mut rng);
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }
}
