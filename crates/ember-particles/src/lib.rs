//! Ember Particles - fixed-capacity CPU particle simulation
//!
//! Provides per-emitter particle simulation with:
//! - A circular particle buffer with O(1) bulk release/reclaim and no per-frame
//!   allocation
//! - FIFO lifetime tracking: the oldest particles are always reclaimed first
//! - A composable modifier pipeline (drag, containers, vortex, interpolation
//!   over lifetime) run over every live particle each frame
//! - An emitter that accumulates release debt, samples ranged spawn parameters,
//!   and drives the age/reclaim/release/modify cycle
//!
//! The engine is single-threaded and allocation-free after construction. A
//! saturated buffer silently clamps new releases; that back-pressure is the
//! designed steady state, not an error.

pub mod buffer;
pub mod emitter;
pub mod modifiers;
pub mod params;
pub mod particle;
pub mod rand;

pub use buffer::{ParticleBuffer, ParticleIter, ParticleIterMut};
pub use emitter::Emitter;
pub use modifiers::Modifier;
pub use params::{Range, ReleaseParameters};
pub use particle::Particle;
pub use rand::ParticleRng;
