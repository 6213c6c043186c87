//! Boundary containers
//!
//! Containers are anchored at each particle's `trigger_pos`, not a fixed
//! world origin: every particle bounces or wraps inside its own local bounds
//! centered on its spawn point. Two particles released at different trigger
//! positions therefore never share a wall.

use crate::buffer::ParticleIterMut;
use crate::modifiers::Modifier;

/// Axis-aligned box that reflects particles off its walls.
///
/// Each violated axis is handled independently, so a particle leaving
/// through a corner reflects on both in the same frame. Position is
/// mirrored about the wall; the velocity component along the violated axis
/// is negated and scaled by `restitution` (1.0 = perfectly elastic).
#[derive(Clone, Copy, Debug)]
pub struct BoxContainer {
    pub half_width: f32,
    pub half_height: f32,
    pub restitution: f32,
}

impl Modifier for BoxContainer {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            let mut local = p.position - p.trigger_pos;

            if local.x > self.half_width {
                local.x = 2.0 * self.half_width - local.x;
                p.velocity.x = -p.velocity.x * self.restitution;
            } else if local.x < -self.half_width {
                local.x = -2.0 * self.half_width - local.x;
                p.velocity.x = -p.velocity.x * self.restitution;
            }

            if local.y > self.half_height {
                local.y = 2.0 * self.half_height - local.y;
                p.velocity.y = -p.velocity.y * self.restitution;
            } else if local.y < -self.half_height {
                local.y = -2.0 * self.half_height - local.y;
                p.velocity.y = -p.velocity.y * self.restitution;
            }

            p.position = p.trigger_pos + local;
        }
    }
}

/// Axis-aligned box that wraps particles toroidally: leaving through one
/// edge re-enters through the opposite one with velocity untouched.
#[derive(Clone, Copy, Debug)]
pub struct LoopBoxContainer {
    pub half_width: f32,
    pub half_height: f32,
}

impl Modifier for LoopBoxContainer {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            let mut local = p.position - p.trigger_pos;

            if local.x > self.half_width {
                local.x -= 2.0 * self.half_width;
            } else if local.x < -self.half_width {
                local.x += 2.0 * self.half_width;
            }

            if local.y > self.half_height {
                local.y -= 2.0 * self.half_height;
            } else if local.y < -self.half_height {
                local.y += 2.0 * self.half_height;
            }

            p.position = p.trigger_pos + local;
        }
    }
}

/// Circular boundary that keeps particles inside (or outside) a radius.
///
/// A particle crossing the boundary is repositioned exactly onto it and its
/// radial velocity component is negated and scaled by `restitution`; the
/// tangential component is preserved. A particle sitting exactly on the
/// center has no usable normal and is skipped for the frame.
#[derive(Clone, Copy, Debug)]
pub struct CircleContainer {
    pub radius: f32,
    /// `true` keeps particles inside the circle, `false` keeps them out
    pub inside: bool,
    pub restitution: f32,
}

impl Modifier for CircleContainer {
    fn update(&self, _elapsed: f32, particles: &mut ParticleIterMut<'_>) {
        while let Some(p) = particles.next() {
            let offset = p.position - p.trigger_pos;
            let distance = offset.length();
            if distance <= f32::EPSILON {
                continue;
            }

            let violated = if self.inside {
                distance > self.radius
            } else {
                distance < self.radius
            };
            if !violated {
                continue;
            }

            let normal = offset * (1.0 / distance);
            p.position = p.trigger_pos + normal * self.radius;

            let radial = p.velocity.dot(&normal);
            p.velocity -= normal * ((1.0 + self.restitution) * radial);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ParticleBuffer;
    use ember_core::Vec2;

    #[test]
    fn box_bounce_mirrors_position_and_velocity() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        p.trigger_pos = Vec2::ZERO;
        p.position = Vec2::new(12.0, 0.0);
        p.velocity = Vec2::new(5.0, 3.0);
        drop(cursor);

        let container = BoxContainer {
            half_width: 10.0,
            half_height: 10.0,
            restitution: 0.5,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let p = *buffer.iter().next().unwrap();
        assert!((p.position.x - 8.0).abs() < 1e-5);
        assert!((p.velocity.x - (-2.5)).abs() < 1e-5);
        assert!((p.velocity.y - 3.0).abs() < 1e-5, "y axis untouched");
    }

    #[test]
    fn box_bounce_handles_both_axes_in_one_frame() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        p.position = Vec2::new(11.0, -11.0);
        p.velocity = Vec2::new(4.0, -4.0);
        drop(cursor);

        let container = BoxContainer {
            half_width: 10.0,
            half_height: 10.0,
            restitution: 1.0,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let p = *buffer.iter().next().unwrap();
        assert!((p.position.x - 9.0).abs() < 1e-5);
        assert!((p.position.y - (-9.0)).abs() < 1e-5);
        assert_eq!(p.velocity, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn elastic_bounce_conserves_speed() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        p.position = Vec2::new(10.5, 3.0);
        p.velocity = Vec2::new(7.0, -2.0);
        drop(cursor);

        let before = buffer.iter().next().unwrap().velocity.length();
        let container = BoxContainer {
            half_width: 10.0,
            half_height: 10.0,
            restitution: 1.0,
        };
        container.update(0.016, &mut buffer.iter_mut());
        let after = buffer.iter().next().unwrap().velocity.length();

        assert!((before - after).abs() < 1e-5);
    }

    #[test]
    fn particles_bounce_in_their_own_local_box() {
        let mut buffer = ParticleBuffer::new(2).unwrap();
        let mut cursor = buffer.release(2);
        let p = cursor.next().unwrap();
        p.trigger_pos = Vec2::ZERO;
        p.position = Vec2::new(12.0, 0.0);
        p.velocity = Vec2::new(1.0, 0.0);
        let p = cursor.next().unwrap();
        p.trigger_pos = Vec2::new(100.0, 0.0);
        p.position = Vec2::new(112.0, 0.0);
        p.velocity = Vec2::new(1.0, 0.0);
        drop(cursor);

        let container = BoxContainer {
            half_width: 10.0,
            half_height: 10.0,
            restitution: 1.0,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let positions: Vec<Vec2> = buffer.iter().map(|p| p.position).collect();
        // Each particle reflects off the wall of its own box, 100 units apart
        assert!((positions[0].x - 8.0).abs() < 1e-5);
        assert!((positions[1].x - 108.0).abs() < 1e-5);
    }

    #[test]
    fn loop_box_wraps_without_touching_velocity() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        p.position = Vec2::new(10.5, 0.0);
        p.velocity = Vec2::new(3.0, 1.0);
        drop(cursor);

        let container = LoopBoxContainer {
            half_width: 10.0,
            half_height: 10.0,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let p = *buffer.iter().next().unwrap();
        assert!((p.position.x - (-9.5)).abs() < 1e-5, "re-enters opposite edge");
        assert_eq!(p.velocity, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn circle_repositions_onto_boundary() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        // Distance radius * 1.5 from the anchor, moving straight out
        p.position = Vec2::new(15.0, 0.0);
        p.velocity = Vec2::new(4.0, 2.0);
        drop(cursor);

        let container = CircleContainer {
            radius: 10.0,
            inside: true,
            restitution: 0.5,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let p = *buffer.iter().next().unwrap();
        let distance = (p.position - p.trigger_pos).length();
        assert!((distance - 10.0).abs() < 1e-4);
        // Radial (x) component negated and scaled, tangential (y) preserved
        assert!((p.velocity.x - (-2.0)).abs() < 1e-5);
        assert!((p.velocity.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn circle_outside_mode_pushes_out() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        p.position = Vec2::new(3.0, 0.0);
        p.velocity = Vec2::new(-1.0, 0.0);
        drop(cursor);

        let container = CircleContainer {
            radius: 10.0,
            inside: false,
            restitution: 1.0,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let p = *buffer.iter().next().unwrap();
        assert!(((p.position - p.trigger_pos).length() - 10.0).abs() < 1e-4);
        assert!((p.velocity.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn particle_at_the_center_is_skipped() {
        let mut buffer = ParticleBuffer::new(1).unwrap();
        let mut cursor = buffer.release(1);
        let p = cursor.next().unwrap();
        p.position = Vec2::ZERO;
        p.velocity = Vec2::new(1.0, 0.0);
        drop(cursor);

        let container = CircleContainer {
            radius: 10.0,
            inside: false,
            restitution: 1.0,
        };
        container.update(0.016, &mut buffer.iter_mut());

        let p = *buffer.iter().next().unwrap();
        assert_eq!(p.position, Vec2::ZERO, "no usable normal, left untouched");
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
    }
}
