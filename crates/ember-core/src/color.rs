//! Hue/saturation/lightness color
//!
//! Particles store HSL rather than RGB so that color-over-lifetime blends stay
//! perceptually smooth (a red-to-yellow fade passes through orange, not brown).

use serde::{Deserialize, Serialize};

/// An HSL color: hue in degrees [0, 360), saturation and lightness in [0, 1]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl HslColor {
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        lightness: 1.0,
    };
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        lightness: 0.0,
    };
    pub const RED: Self = Self {
        hue: 0.0,
        saturation: 1.0,
        lightness: 0.5,
    };
    pub const GREEN: Self = Self {
        hue: 120.0,
        saturation: 1.0,
        lightness: 0.5,
    };
    pub const BLUE: Self = Self {
        hue: 240.0,
        saturation: 1.0,
        lightness: 0.5,
    };

    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Linear blend toward `other`, taking the shortest arc around the hue wheel
    /// (350° to 10° passes through 0°, not 180°).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut dh = (other.hue - self.hue) % 360.0;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        Self {
            hue: (self.hue + dh * t).rem_euclid(360.0),
            saturation: self.saturation + (other.saturation - self.saturation) * t,
            lightness: self.lightness + (other.lightness - self.lightness) * t,
        }
    }

    /// Convert to RGB in [0, 1], for renderers that want linear color channels
    pub fn to_rgb(&self) -> [f32; 3] {
        let h = self.hue.rem_euclid(360.0);
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = self.lightness - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [r + m, g + m, b + m]
    }
}
