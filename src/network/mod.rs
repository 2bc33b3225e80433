//! WebSocket broadcast of the particle view.
//!
//! Kept apart from the physics on purpose: the server reads the world
//! through its particle accessor under the shared lock and never feeds
//! anything back into it.

pub mod server;
pub mod snapshot;

pub use server::BroadcastServer;
pub use snapshot::ParticleState;
