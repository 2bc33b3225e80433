//! Starting configurations: a rigid tetrahedron nucleus and electrons
//! seeded onto orbits around it.

use glam::DVec3;
use rand::Rng;

use crate::{
    core::particle::Particle,
    dynamics::forces,
    utils::math::random_unit_vector,
    world::SimulationWorld,
};

/// Regular tetrahedron vertices; edge length 2 * sqrt(2) before scaling.
const TETRAHEDRON: [DVec3; 4] = [
    DVec3::new(1.0, 1.0, 1.0),
    DVec3::new(1.0, -1.0, -1.0),
    DVec3::new(-1.0, 1.0, -1.0),
    DVec3::new(-1.0, -1.0, 1.0),
];

/// Places four nucleus particles on tetrahedron vertices scaled so every
/// pairwise distance equals the world's rest distance, with ids 1 through 4.
/// The cluster's center of mass lands exactly on the origin.
pub fn spawn_tetrahedron_nucleus(world: &mut SimulationWorld, mass: f64, charge: f64) {
    let scale = world.params.rest_distance / (2.0 * 2.0_f64.sqrt());
    for (index, vertex) in TETRAHEDRON.iter().enumerate() {
        world.add_particle(Particle::nucleus(
            *vertex * scale,
            mass,
            charge,
            index as i32 + 1,
        ));
    }
}

/// Adds an electron whose Verlet state encodes `velocity` for the given
/// timestep. The id is auto-assigned by the world; the storage index is
/// returned.
pub fn spawn_orbiting_electron(
    world: &mut SimulationWorld,
    position: DVec3,
    velocity: DVec3,
    mass: f64,
    charge: f64,
    dt: f64,
) -> usize {
    let mut electron = Particle::electron(position, mass, charge, Particle::UNSET_ID);
    electron.set_velocity(velocity, dt);
    world.add_particle(electron)
}

/// Speed of a circular orbit at `radius` around the world's current
/// nucleus: `v = sqrt(k * |q * Q| / (m * r))`, balancing the attraction
/// against the centripetal demand.
pub fn circular_orbit_speed(
    world: &SimulationWorld,
    radius: f64,
    electron_mass: f64,
    electron_charge: f64,
) -> f64 {
    let total_charge = forces::total_nucleus_charge(world.particles());
    (world.params.coulomb_constant * (electron_charge * total_charge).abs()
        / (electron_mass * radius))
        .sqrt()
}

/// Random direction scaled to `speed`, for seeding electrons onto orbital
/// planes outside XY.
pub fn random_velocity(rng: &mut impl Rng, speed: f64) -> DVec3 {
    random_unit_vector(rng) * speed
}
