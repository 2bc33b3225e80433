use crate::core::particle::{Particle, ParticleKind};

/// Pairs closer than this are skipped; the correction direction would be
/// undefined.
const COINCIDENT_EPS: f64 = 1e-9;

/// Position-based distance constraint solver holding the nucleus rigid.
///
/// Every unordered pair of nucleus particles is nudged toward
/// `rest_distance`, with the correction split by the other endpoint's share
/// of the pair mass so heavier particles move less. A single pairwise pass
/// is not simultaneously consistent for more than two particles, which is
/// why the pass is relaxed `iterations` times per step.
#[derive(Debug, Clone, Copy)]
pub struct DistanceSolver {
    pub rest_distance: f64,
    pub iterations: u32,
}

impl DistanceSolver {
    pub fn new(rest_distance: f64, iterations: u32) -> Self {
        Self {
            rest_distance,
            iterations,
        }
    }

    /// Runs the relaxation over every nucleus pair, in place. Electrons are
    /// never touched. Only `position` moves; `previous_position` stays, so
    /// corrections feed back into the implied velocity.
    pub fn solve(&self, particles: &mut [Particle]) {
        let nuclei: Vec<usize> = particles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.kind == ParticleKind::Nucleus)
            .map(|(i, _)| i)
            .collect();
        if nuclei.len() < 2 {
            return;
        }

        for _ in 0..self.iterations {
            for a in 0..nuclei.len() {
                for b in (a + 1)..nuclei.len() {
                    let (i, j) = (nuclei[a], nuclei[b]);

                    let delta = particles[j].position - particles[i].position;
                    let distance = delta.length();
                    if distance < COINCIDENT_EPS {
                        continue;
                    }

                    // Fractional error and its inverse-mass split.
                    let diff = (distance - self.rest_distance) / distance;
                    let correction = delta * diff;

                    let w1 = particles[i].mass;
                    let w2 = particles[j].mass;
                    let mut total = w1 + w2;
                    if total <= 0.0 {
                        total = 1.0;
                    }

                    particles[i].position += correction * (w2 / total);
                    particles[j].position -= correction * (w1 / total);
                }
            }
        }
    }
}
