use glam::DVec3;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::SimulationParams,
    core::particle::{Particle, ParticleKind},
    dynamics::{
        forces::{self, CoulombAttraction, ForceModel},
        integrator,
        solver::DistanceSolver,
    },
    utils::{logging::ScopedTimer, math::random_unit_vector},
};

/// Central simulation container orchestrating the step pipeline.
///
/// Holds the ordered particle store and the run parameters. The world is
/// single-threaded and does no locking of its own; when a broadcaster
/// thread reads the particle view concurrently, both sides must share one
/// external mutex, held across each `step` call and each snapshot read.
pub struct SimulationWorld {
    particles: Vec<Particle>,
    pub params: SimulationParams,
    rng: StdRng,
    /// High-water mark over every id inserted so far. Auto-assignment hands
    /// out `highest_id + 1`, which matches a max-scan over the append-only
    /// store without paying for the scan.
    highest_id: i32,
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::new(SimulationParams::default())
    }
}

impl SimulationWorld {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            particles: Vec::new(),
            params,
            rng: StdRng::from_entropy(),
            highest_id: 0,
        }
    }

    /// Ordered view of all particles, for snapshots and inspection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Appends a particle and returns its storage index.
    ///
    /// A particle carrying `Particle::UNSET_ID` gets the highest id seen so
    /// far plus one, except when the store is still empty: the very first
    /// particle keeps whatever id it was built with, sentinel included.
    /// Mixing explicit and auto-assigned ids leaves uniqueness to the
    /// caller.
    pub fn add_particle(&mut self, mut particle: Particle) -> usize {
        if particle.id == Particle::UNSET_ID && !self.particles.is_empty() {
            particle.id = self.highest_id + 1;
        }
        self.highest_id = self.highest_id.max(particle.id);
        self.particles.push(particle);
        self.particles.len() - 1
    }

    /// Mass-weighted center of the nucleus cluster; the origin when there
    /// is no nucleus mass.
    pub fn nucleus_center(&self) -> DVec3 {
        forces::nucleus_center(&self.particles)
    }

    /// Advances the simulation by one step. A non-positive `dt` is a no-op.
    ///
    /// One sequential pass evaluates each particle's acceleration against
    /// the current (so partially updated) state and integrates it in place;
    /// the constraint pass then pulls the nucleus back into shape. Nucleus
    /// particles receive the optional jitter acceleration, electrons the
    /// Coulomb pull.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        let field = CoulombAttraction::new(self.params.coulomb_constant, self.params.min_distance);

        {
            let _timer = ScopedTimer::new("integrator");
            for index in 0..self.particles.len() {
                let acceleration = match self.particles[index].kind {
                    ParticleKind::Electron => {
                        let mass = self.particles[index].mass;
                        if mass > 0.0 {
                            field.force_on(&self.particles, index) / mass
                        } else {
                            DVec3::ZERO
                        }
                    }
                    ParticleKind::Nucleus if self.params.jitter_intensity > 0.0 => {
                        random_unit_vector(&mut self.rng) * self.params.jitter_intensity
                    }
                    ParticleKind::Nucleus => DVec3::ZERO,
                };
                integrator::advance(&mut self.particles[index], acceleration, dt);
            }
        }

        {
            let _timer = ScopedTimer::new("constraints::solve");
            let solver = DistanceSolver::new(
                self.params.rest_distance,
                self.params.constraint_iterations,
            );
            solver.solve(&mut self.particles);
        }
    }
}
