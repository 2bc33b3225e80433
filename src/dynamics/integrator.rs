use glam::DVec3;

use crate::core::particle::Particle;

/// Advances one particle by one position-Verlet step.
///
/// `next = 2 * position - previous_position + acceleration * dt^2`, after
/// which the position pair shifts forward. Velocity stays implicit in the
/// pair, so a constraint pass that moves `position` afterwards changes the
/// velocity the next step sees.
pub fn advance(particle: &mut Particle, acceleration: DVec3, dt: f64) {
    let next = 2.0 * particle.position - particle.previous_position + acceleration * (dt * dt);
    particle.previous_position = particle.position;
    particle.position = next;
}
