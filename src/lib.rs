//! Atom Sim – a Verlet-integration toy atom.
//!
//! A cluster of mutually rigid nucleus particles sits at the center of the
//! simulation while electrons orbit it, pulled in by a Coulomb-like
//! attraction. The physics core is pure computation; the WebSocket
//! broadcaster and the scene helpers live in their own modules and only
//! ever read the particle view.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod network;
pub mod scene;
pub mod utils;
pub mod world;

pub use glam::DVec3;

pub use config::SimulationParams;
pub use core::{Particle, ParticleKind};
pub use dynamics::{
    forces::{nucleus_center, total_nucleus_charge, CoulombAttraction, ForceModel},
    solver::DistanceSolver,
};
pub use network::{BroadcastServer, ParticleState};
pub use world::SimulationWorld;
