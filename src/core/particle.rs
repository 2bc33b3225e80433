//! The point-mass particle and its Verlet position state.

use glam::DVec3;

/// Particle category: member of the mutually rigid nucleus, or an electron
/// orbiting it. The category decides which forces and constraints apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Nucleus,
    Electron,
}

/// A point mass carrying Verlet state.
///
/// Velocity is never stored; it is implied by the pair of positions as
/// `(position - previous_position) / dt`. Fields are public on purpose so
/// scene builders can assemble particles directly.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: DVec3,
    pub previous_position: DVec3,
    pub mass: f64,
    /// Electric charge in arbitrary units (e.g. +1 per proton, -1 per
    /// electron).
    pub charge: f64,
    pub kind: ParticleKind,
    /// Identifier for external correlation across state snapshots; never
    /// used for internal indexing.
    pub id: i32,
}

impl Particle {
    /// Sentinel id meaning "let the world assign one on insertion".
    pub const UNSET_ID: i32 = 0;

    /// Builds a particle at rest: both positions coincide, so the implied
    /// velocity is zero.
    pub fn new(position: DVec3, mass: f64, charge: f64, kind: ParticleKind, id: i32) -> Self {
        Self {
            position,
            previous_position: position,
            mass,
            charge,
            kind,
            id,
        }
    }

    /// Nucleus particle at rest.
    pub fn nucleus(position: DVec3, mass: f64, charge: f64, id: i32) -> Self {
        Self::new(position, mass, charge, ParticleKind::Nucleus, id)
    }

    /// Electron particle at rest.
    pub fn electron(position: DVec3, mass: f64, charge: f64, id: i32) -> Self {
        Self::new(position, mass, charge, ParticleKind::Electron, id)
    }

    /// Velocity implied by the Verlet state for the given timestep.
    /// Returns zero for a non-positive `dt` rather than dividing by it.
    pub fn velocity(&self, dt: f64) -> DVec3 {
        if dt <= 0.0 {
            return DVec3::ZERO;
        }
        (self.position - self.previous_position) / dt
    }

    /// Rewrites `previous_position` so that the next `velocity(dt)` read
    /// returns `velocity`. The current position is left untouched.
    pub fn set_velocity(&mut self, velocity: DVec3, dt: f64) {
        self.previous_position = self.position - velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_particle_starts_at_rest() {
        let p = Particle::nucleus(DVec3::new(1.0, 2.0, 3.0), 1.0, 1.0, 1);
        assert_eq!(p.previous_position, p.position);
        assert_eq!(p.velocity(0.008), DVec3::ZERO);
    }

    #[test]
    fn velocity_round_trips_through_set_velocity() {
        let mut p = Particle::electron(DVec3::new(5.0, 0.0, 0.0), 0.02, -1.0, 1);
        let target = DVec3::new(0.0, 6.5, -1.25);
        for dt in [0.008, 0.5, 2.0] {
            p.set_velocity(target, dt);
            let v = p.velocity(dt);
            assert_relative_eq!(v.x, target.x, epsilon = 1e-9);
            assert_relative_eq!(v.y, target.y, epsilon = 1e-9);
            assert_relative_eq!(v.z, target.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn set_velocity_leaves_position_untouched() {
        let mut p = Particle::electron(DVec3::new(7.0, 0.0, 0.0), 0.02, -1.0, 1);
        p.set_velocity(DVec3::new(0.0, 5.0, 0.0), 0.008);
        assert_eq!(p.position, DVec3::new(7.0, 0.0, 0.0));
        assert!(p.previous_position != p.position);
    }

    #[test]
    fn velocity_is_zero_for_non_positive_dt() {
        let mut p = Particle::electron(DVec3::ZERO, 0.02, -1.0, 1);
        p.set_velocity(DVec3::new(1.0, 0.0, 0.0), 0.008);
        assert_eq!(p.velocity(0.0), DVec3::ZERO);
        assert_eq!(p.velocity(-0.008), DVec3::ZERO);
    }
}
