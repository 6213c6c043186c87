//! Ember Core - foundational types for the Ember particle toolkit
//!
//! This crate provides the types the engine crates depend on:
//! - `Vec2` - 2D vector math
//! - `HslColor` - hue/saturation/lightness color with perceptual interpolation
//! - Error types and Result alias

mod color;
mod error;
mod math;

pub use color::HslColor;
pub use error::{EmberError, Result};
pub use math::Vec2;
