//! Simulation dynamics modules: the force model, the Verlet integrator,
//! and the nucleus rigidity solver.

pub mod forces;
pub mod integrator;
pub mod solver;

pub use forces::{nucleus_center, total_nucleus_charge, CoulombAttraction, ForceModel};
pub use solver::DistanceSolver;
