use crate::core::particle::{Particle, ParticleKind};
use glam::DVec3;

/// Mass-weighted center of all nucleus particles.
///
/// Falls back to the origin when no nucleus particle exists or the total
/// nucleus mass is non-positive, so callers never divide by zero.
pub fn nucleus_center(particles: &[Particle]) -> DVec3 {
    let mut weighted = DVec3::ZERO;
    let mut total_mass = 0.0;
    for p in particles {
        if p.kind == ParticleKind::Nucleus {
            weighted += p.position * p.mass;
            total_mass += p.mass;
        }
    }
    if total_mass <= 0.0 {
        return DVec3::ZERO;
    }
    weighted / total_mass
}

/// Sum of charges over all nucleus particles.
pub fn total_nucleus_charge(particles: &[Particle]) -> f64 {
    particles
        .iter()
        .filter(|p| p.kind == ParticleKind::Nucleus)
        .map(|p| p.charge)
        .sum()
}

/// Trait describing a force evaluated for one particle against the whole
/// current collection.
pub trait ForceModel {
    fn force_on(&self, particles: &[Particle], index: usize) -> DVec3;
}

/// Coulomb-like attraction pulling electrons toward the nucleus center of
/// mass: `F = k * |q * Q| / r^2`, with `r` clamped below by `min_distance`
/// before squaring.
///
/// The charge product is taken in absolute value, so the pull holds for
/// every sign combination. Nucleus particles receive no force from this
/// term.
#[derive(Debug, Clone, Copy)]
pub struct CoulombAttraction {
    pub coulomb_constant: f64,
    pub min_distance: f64,
}

impl CoulombAttraction {
    pub fn new(coulomb_constant: f64, min_distance: f64) -> Self {
        Self {
            coulomb_constant,
            min_distance,
        }
    }
}

impl ForceModel for CoulombAttraction {
    fn force_on(&self, particles: &[Particle], index: usize) -> DVec3 {
        let p = &particles[index];
        if p.kind != ParticleKind::Electron {
            return DVec3::ZERO;
        }

        let center = nucleus_center(particles);
        let delta = center - p.position;
        let distance = delta.length().max(self.min_distance);

        let total_charge = total_nucleus_charge(particles);
        let magnitude =
            self.coulomb_constant * (p.charge * total_charge).abs() / (distance * distance);

        // Zero-length delta normalizes to zero, killing the force instead
        // of producing NaN.
        delta.normalize_or_zero() * magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_nucleus_cluster() -> Vec<Particle> {
        vec![
            Particle::nucleus(DVec3::ZERO, 1.0, 1.0, 1),
            Particle::nucleus(DVec3::new(4.0, 0.0, 0.0), 3.0, 1.0, 2),
        ]
    }

    #[test]
    fn nucleus_center_is_mass_weighted() {
        let particles = two_nucleus_cluster();
        let center = nucleus_center(&particles);
        assert_relative_eq!(center.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(center.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn nucleus_center_falls_back_to_origin() {
        // No nucleus particles at all.
        let electrons = vec![Particle::electron(DVec3::new(5.0, 1.0, 0.0), 0.02, -1.0, 1)];
        assert_eq!(nucleus_center(&electrons), DVec3::ZERO);

        // Nucleus present but with non-positive total mass.
        let weightless = vec![Particle::nucleus(DVec3::new(2.0, 0.0, 0.0), 0.0, 1.0, 1)];
        assert_eq!(nucleus_center(&weightless), DVec3::ZERO);
    }

    #[test]
    fn electrons_are_excluded_from_the_center() {
        let mut particles = two_nucleus_cluster();
        particles.push(Particle::electron(DVec3::new(100.0, 0.0, 0.0), 50.0, -1.0, 3));
        assert_relative_eq!(nucleus_center(&particles).x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn attraction_points_toward_the_nucleus() {
        let mut particles = two_nucleus_cluster();
        particles.push(Particle::electron(DVec3::new(13.0, 0.0, 0.0), 0.02, -1.0, 3));

        let field = CoulombAttraction::new(1.2, 2.0);
        let force = field.force_on(&particles, 2);

        assert!(force.x < 0.0, "electron at +x must be pulled toward -x, got {force:?}");
        assert_relative_eq!(force.y, 0.0, epsilon = 1e-12);
        // r = 10 from the center of mass at (3,0,0): F = 1.2 * |-1 * 2| / 100.
        assert_relative_eq!(force.length(), 0.024, epsilon = 1e-12);
    }

    #[test]
    fn force_is_clamped_below_min_distance() {
        let field = CoulombAttraction::new(1.0, 2.0);
        let at_floor = vec![
            Particle::nucleus(DVec3::ZERO, 1.0, 1.0, 1),
            Particle::electron(DVec3::new(2.0, 0.0, 0.0), 0.02, -1.0, 2),
        ];
        let inside = vec![
            Particle::nucleus(DVec3::ZERO, 1.0, 1.0, 1),
            Particle::electron(DVec3::new(0.5, 0.0, 0.0), 0.02, -1.0, 2),
        ];

        let f_floor = field.force_on(&at_floor, 1).length();
        let f_inside = field.force_on(&inside, 1).length();
        assert_relative_eq!(f_floor, f_inside, epsilon = 1e-12);
    }

    #[test]
    fn nucleus_particles_feel_no_attraction() {
        let particles = two_nucleus_cluster();
        let field = CoulombAttraction::new(1.2, 1e-6);
        assert_eq!(field.force_on(&particles, 0), DVec3::ZERO);
        assert_eq!(field.force_on(&particles, 1), DVec3::ZERO);
    }

    #[test]
    fn attraction_holds_for_like_charges() {
        // Deliberate model quirk: |q * Q| makes a positive test charge
        // attract as well.
        let particles = vec![
            Particle::nucleus(DVec3::ZERO, 1.0, 1.0, 1),
            Particle::electron(DVec3::new(4.0, 0.0, 0.0), 0.02, 1.0, 2),
        ];
        let field = CoulombAttraction::new(1.0, 1e-6);
        let force = field.force_on(&particles, 1);
        assert!(force.x < 0.0, "pull must hold regardless of sign, got {force:?}");
    }
}
