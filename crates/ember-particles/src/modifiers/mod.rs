//! The modifier pipeline
//!
//! A modifier is a stateless transformation run over every live particle once
//! per frame. The emitter holds modifiers in a caller-configured list and runs
//! them in that order; later modifiers see state already mutated by earlier
//! ones, so the order is part of an effect's definition (drag before a bounce
//! container damps the incoming velocity, drag after damps the reflected one).
//! The pipeline never reorders the list.
//!
//! All modifier math is single-precision. Degenerate geometry (a particle
//! sitting exactly on a reflection origin) skips that particle for the frame
//! rather than writing NaN into stored state.

mod containers;
mod drag;
mod interpolate;
mod rotation;
mod vortex;

pub use containers::{BoxContainer, CircleContainer, LoopBoxContainer};
pub use drag::DragModifier;
pub use interpolate::{
    ColorInterpolator, Interpolate, Keyframe, OpacityInterpolator, ScaleInterpolator, Track,
    VelocityColorModifier,
};
pub use rotation::RotationModifier;
pub use vortex::VortexModifier;

use crate::buffer::ParticleIterMut;

/// A per-frame transformation applied to every live particle.
///
/// Implementations must consume the cursor fully (call `next` until it yields
/// `None`) and must not retain it past the call; the emitter hands each
/// modifier a fresh full-scan cursor every frame. Modifiers hold only their
/// own tunable parameters — any per-particle state lives on the particle.
pub trait Modifier {
    fn update(&self, elapsed: f32, particles: &mut ParticleIterMut<'_>);
}
