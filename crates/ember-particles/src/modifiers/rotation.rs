//! Constant angular velocity

use crate::buffer::ParticleIterMut;
use crate::modifiers::Modifier;

/// Spins every particle at `rate` radians per second
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationModifier {
    pub rate: f32,
}

impl Modifier for RotationModifier {
    fn update(&self, elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        let step = self.rate * elapsed;
        while let Some(p) = particles.next() {
            p.rotation += step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ParticleBuffer;

    #[test]
    fn rotation_advances_linearly() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        buffer.release(1);

        let modifier = RotationModifier { rate: 2.0 };
        for _ in 0..10 {
            modifier.update(0.1, &mut buffer.iter_mut());
        }
        let rotation = buffer.iter().next().unwrap().rotation;
        assert!((rotation - 2.0).abs() < 1e-5);
    }
}
