//! Value-over-lifetime interpolation modifiers
//!
//! A `Track` is a chain of `(age, value)` keyframes; sampling blends linearly
//! between the two keyframes straddling the particle's age and clamps at the
//! ends. Tracks drive the color/opacity/scale interpolators, which overwrite
//! their field on every live particle from its normalized age each frame.

use crate::buffer::ParticleIterMut;
use crate::modifiers::Modifier;
use ember_core::HslColor;

/// Types a `Track` can blend between keyframes
pub trait Interpolate: Copy {
    fn lerp(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for HslColor {
    fn lerp(self, other: Self, t: f32) -> Self {
        HslColor::lerp(&self, &other, t)
    }
}

/// One `(age threshold, target value)` pair
#[derive(Clone, Copy, Debug)]
pub struct Keyframe<T> {
    /// Normalized age in [0, 1] at which `value` is fully reached
    pub age: f32,
    pub value: T,
}

/// A piecewise-linear curve over normalized age
#[derive(Clone, Debug)]
pub struct Track<T> {
    keys: Vec<Keyframe<T>>,
}

impl<T: Interpolate> Track<T> {
    /// Build a track from keyframes, sorted by age
    pub fn new(mut keys: Vec<Keyframe<T>>) -> Self {
        keys.sort_by(|a, b| a.age.total_cmp(&b.age));
        Self { keys }
    }

    /// The common two-key case: `start` at age 0, `end` at age 1
    pub fn between(start: T, end: T) -> Self {
        Self {
            keys: vec![
                Keyframe {
                    age: 0.0,
                    value: start,
                },
                Keyframe {
                    age: 1.0,
                    value: end,
                },
            ],
        }
    }

    /// Sample the track at `age`, clamping before the first and after the
    /// last keyframe. Returns `None` for an empty track.
    pub fn sample(&self, age: f32) -> Option<T> {
        let first = self.keys.first()?;
        if age <= first.age {
            return Some(first.value);
        }
        let last = self.keys.last()?;
        if age >= last.age {
            return Some(last.value);
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if age <= b.age {
                let span = b.age - a.age;
                if span <= f32::EPSILON {
                    return Some(b.value);
                }
                let t = (age - a.age) / span;
                return Some(a.value.lerp(b.value, t));
            }
        }
        Some(last.value)
    }
}

/// Rewrites particle color from an age-keyed track
pub struct ColorInterpolator {
    pub track: Track<HslColor>,
}

impl Modifier for ColorInterpolator {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            if let Some(color) = self.track.sample(p.age) {
                p.color = color;
            }
        }
    }
}

/// Rewrites particle opacity from an age-keyed track
pub struct OpacityInterpolator {
    pub track: Track<f32>,
}

impl Modifier for OpacityInterpolator {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            if let Some(opacity) = self.track.sample(p.age) {
                p.opacity = opacity;
            }
        }
    }
}

/// Rewrites particle scale from an age-keyed track
pub struct ScaleInterpolator {
    pub track: Track<f32>,
}

impl Modifier for ScaleInterpolator {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            if let Some(scale) = self.track.sample(p.age) {
                p.scale = scale;
            }
        }
    }
}

/// Blends particle color by speed instead of age: `stationary` at rest,
/// `full_speed` at or above `full_speed_threshold` units per second.
pub struct VelocityColorModifier {
    pub stationary: HslColor,
    pub full_speed: HslColor,
    pub full_speed_threshold: f32,
}

impl Modifier for VelocityColorModifier {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        if self.full_speed_threshold <= 0.0 {
            return;
        }
        while let Some(p) = particles.next() {
            let t = (p.velocity.length() / self.full_speed_threshold).clamp(0.0, 1.0);
            p.color = self.stationary.lerp(self.full_speed, t);
        }
    }
}
