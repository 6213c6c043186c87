//! The per-particle value record

use ember_core::{HslColor, Vec2};

/// One simulated particle. A plain value record with no identity beyond its
/// buffer slot; every field is rewritten in place by the emitter and modifiers.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: HslColor,
    pub opacity: f32,
    /// Normalized age in [0, 1]: fraction of lifetime elapsed.
    /// At 1.0 the particle is eligible for reclamation.
    pub age: f32,
    pub mass: f32,
    /// Orientation in radians
    pub rotation: f32,
    pub scale: f32,
    /// Spawn origin supplied by the emitter at release time. Container and
    /// vortex modifiers anchor their bounds here, so each particle carries its
    /// own local space.
    pub trigger_pos: Vec2,
}

impl Particle {
    /// A zeroed slot awaiting release
    pub fn dead() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            color: HslColor::BLACK,
            opacity: 0.0,
            age: 0.0,
            mass: 0.0,
            rotation: 0.0,
            scale: 0.0,
            trigger_pos: Vec2::ZERO,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age >= 1.0
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_particle_is_not_expired() {
        let p = Particle::dead();
        assert!(!p.is_expired());
        assert_eq!(p.age, 0.0);
    }

    #[test]
    fn expiry_threshold() {
        let mut p = Particle::dead();
        p.age = 0.999;
        assert!(!p.is_expired());
        p.age = 1.0;
        assert!(p.is_expired());
    }
}
