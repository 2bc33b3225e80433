//! Core types describing simulation entities and shared data.

pub mod particle;

pub use particle::{Particle, ParticleKind};
