//! Central gravity well

use crate::buffer::ParticleIterMut;
use crate::modifiers::Modifier;
use ember_core::Vec2;

/// Pulls particles toward a point with inverse-square falloff.
///
/// The well sits at `position` offset from each particle's `trigger_pos`,
/// so like the containers it acts in the particle's local space. `mass`
/// scales the pull; the speed gain per frame is `mass * dt / distance²`
/// along the normalized direction to the well. A particle exactly at the
/// well has no direction and is skipped for the frame.
#[derive(Clone, Copy, Debug)]
pub struct VortexModifier {
    /// Well offset from each particle's trigger position
    pub position: Vec2,
    pub mass: f32,
}

impl Modifier for VortexModifier {
    fn update(&self, elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            let center = self.position + p.trigger_pos;
            let direction = center - p.position;
            let distance_squared = direction.length_squared();
            if distance_squared <= f32::EPSILON {
                continue;
            }

            let speed_gain = self.mass * elapsed / distance_squared;
            p.velocity += direction.normalized() * speed_gain;
        }
    }
}
