//! Ranged release parameters sampled per spawned particle

use crate::rand::ParticleRng;
use ember_core::{EmberError, Result};
use serde::{Deserialize, Serialize};

/// A `(min, max)` pair sampled uniformly
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A degenerate range that always samples the same value
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(EmberError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn sample(&self, rng: &mut ParticleRng) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.range(self.min, self.max)
    }
}

/// Ranged configuration for newly released particles. Each field is sampled
/// independently per particle (quantity once per release trigger).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReleaseParameters {
    /// Particles spawned per release trigger
    pub quantity: Range,
    /// Initial speed; direction is uniform on the circle
    pub speed: Range,
    pub opacity: Range,
    pub scale: Range,
    /// Initial orientation in radians
    pub rotation: Range,
    pub mass: Range,
    /// Hue in degrees
    pub hue: Range,
    pub saturation: Range,
    pub lightness: Range,
}

impl Default for ReleaseParameters {
    fn default() -> Self {
        Self {
            quantity: Range::fixed(1.0),
            speed: Range::new(25.0, 75.0),
            opacity: Range::fixed(1.0),
            scale: Range::fixed(1.0),
            rotation: Range::new(0.0, std::f32::consts::TAU),
            mass: Range::fixed(1.0),
            hue: Range::new(0.0, 360.0),
            saturation: Range::fixed(0.5),
            lightness: Range::fixed(0.5),
        }
    }
}

impl ReleaseParameters {
    /// Check every range for min > max mistakes
    pub fn validate(&self) -> Result<()> {
        self.quantity.validate()?;
        self.speed.validate()?;
        self.opacity.validate()?;
        self.scale.validate()?;
        self.rotation.validate()?;
        self.mass.validate()?;
        self.hue.validate()?;
        self.saturation.validate()?;
        self.lightness.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stays_in_range() {
        let mut rng = ParticleRng::new(7);
        let range = Range::new(2.0, 5.0);
        for _ in 0..500 {
            let v = range.sample(&mut rng);
            assert!((2.0..5.0).contains(&v));
        }
    }

    #[test]
    fn fixed_range_is_constant() {
        let mut rng = ParticleRng::new(7);
        let range = Range::fixed(3.5);
        assert_eq!(range.sample(&mut rng), 3.5);
        assert_eq!(range.sample(&mut rng), 3.5);
    }

    #[test]
    fn inverted_range_fails_validation() {
        let range = Range::new(5.0, 2.0);
        assert!(range.validate().is_err());

        let params = ReleaseParameters {
            speed: range,
            ..Default::default()
        };
        assert!(params.validate().is_err());
        assert!(ReleaseParameters::default().validate().is_ok());
    }

    #[test]
    fn parameters_roundtrip_through_toml() {
        let params = ReleaseParameters {
            quantity: Range::fixed(10.0),
            speed: Range::new(1.0, 4.0),
            hue: Range::new(180.0, 220.0),
            ..Default::default()
        };
        let text = toml::to_string(&params).unwrap();
        let back: ReleaseParameters = toml::from_str(&text).unwrap();
        assert_eq!(back.quantity, params.quantity);
        assert_eq!(back.speed, params.speed);
        assert_eq!(back.hue, params.hue);
    }

    #[test]
    fn parameters_parse_from_toml_text() {
        let text = r#"
quantity = { min = 5.0, max = 5.0 }
speed = { min = 10.0, max = 20.0 }
opacity = { min = 1.0, max = 1.0 }
scale = { min = 0.5, max = 2.0 }
rotation = { min = 0.0, max = 6.2831855 }
mass = { min = 1.0, max = 1.0 }
hue = { min = 0.0, max = 60.0 }
saturation = { min = 1.0, max = 1.0 }
lightness = { min = 0.5, max = 0.5 }
"#;
        let params: ReleaseParameters = toml::from_str(text).unwrap();
        assert!(params.validate().is_ok());
        assert_eq!(params.speed, Range::new(10.0, 20.0));
        assert_eq!(params.scale, Range::new(0.5, 2.0));
    }
}
