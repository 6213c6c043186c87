//! Linear drag

use crate::buffer::ParticleIterMut;
use crate::modifiers::Modifier;

/// Drag proportional to current velocity: `v += -c * rho * m * dt * v`.
///
/// `coefficient` is the shape's drag coefficient and `density` the fluid
/// density; both scale the per-particle mass, so heavier particles shed
/// speed faster under this model.
#[derive(Clone, Copy, Debug)]
pub struct DragModifier {
    pub coefficient: f32,
    pub density: f32,
}

impl Default for DragModifier {
    fn default() -> Self {
        Self {
            coefficient: 0.47,
            density: 1.2,
        }
    }
}

impl Modifier for DragModifier {
    fn update(&self, elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            let drag = self.coefficient * self.density * p.mass * elapsed;
            p.velocity += p.velocity * -drag;
        }
    }
}
