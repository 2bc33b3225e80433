//! Global configuration for the Atom Sim engine: run parameters and their
//! defaults.

/// Default Coulomb-like force scale `k` in `F = k * |q1 * q2| / r^2`.
pub const DEFAULT_COULOMB_CONSTANT: f64 = 1.0;

/// Default minimum distance used in force evaluation to avoid the
/// short-range singularity.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

/// Default target distance between every pair of nucleus particles.
pub const DEFAULT_REST_DISTANCE: f64 = 1.0;

/// Number of constraint solver passes performed per step.
pub const DEFAULT_CONSTRAINT_ITERATIONS: u32 = 3;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f64 = 0.008;

/// Default interval between WebSocket state broadcasts (50 FPS).
pub const DEFAULT_BROADCAST_INTERVAL_MS: u64 = 20;

/// Tunable physical parameters for a run.
///
/// Callers set these once before stepping begins; the engine reads them on
/// every step and never writes them back.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    /// Coulomb constant `k`. Tuned for visual stability, not realism.
    pub coulomb_constant: f64,
    /// Lower clamp on the distance entering the force law.
    pub min_distance: f64,
    /// Target distance between nucleus particle pairs.
    pub rest_distance: f64,
    /// Constraint solver passes per step; more passes, stiffer nucleus.
    pub constraint_iterations: u32,
    /// Magnitude of the random per-step nucleus acceleration; 0 disables
    /// jitter entirely.
    pub jitter_intensity: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            coulomb_constant: DEFAULT_COULOMB_CONSTANT,
            min_distance: DEFAULT_MIN_DISTANCE,
            rest_distance: DEFAULT_REST_DISTANCE,
            constraint_iterations: DEFAULT_CONSTRAINT_ITERATIONS,
            jitter_intensity: 0.0,
        }
    }
}
