//! The emitter: per-frame spawn, age, reclaim, and pipeline driver

use crate::buffer::{ParticleBuffer, ParticleIter};
use crate::modifiers::Modifier;
use crate::params::ReleaseParameters;
use crate::rand::ParticleRng;
use ember_core::{EmberError, HslColor, Result, Vec2};

/// Owns one particle buffer and a modifier pipeline, and advances the whole
/// simulation one frame per `update` call.
///
/// Per frame, strictly in this order:
/// 1. Age every live particle by `elapsed / lifespan`.
/// 2. Reclaim the expired prefix (oldest particles first — ages are
///    monotone in release order, so expiry is always a contiguous prefix).
/// 3. Accumulate release debt and spawn new particles from the ranged
///    release parameters, clamped to free capacity.
/// 4. Run each modifier over a fresh full-scan cursor.
///
/// Reclaiming before releasing frees capacity for the same frame's spawns,
/// and releasing before the pipeline gives new particles one modifier pass
/// before a renderer ever sees them.
pub struct Emitter {
    buffer: ParticleBuffer,
    modifiers: Vec<Box<dyn Modifier>>,
    params: ReleaseParameters,
    /// Seconds a particle lives; age advances by `elapsed / lifespan`
    lifespan: f32,
    /// Seconds between release triggers: `lifespan / capacity`, the rate at
    /// which a full buffer turns over exactly once per lifespan
    release_interval: f32,
    time_since_release: f32,
    rng: ParticleRng,
}

impl Emitter {
    pub fn new(capacity: usize, lifespan: f32, params: ReleaseParameters) -> Result<Self> {
        if !lifespan.is_finite() || lifespan <= 0.0 {
            return Err(EmberError::InvalidLifespan(lifespan));
        }
        params.validate()?;
        let buffer = ParticleBuffer::new(capacity)?;
        let release_interval = lifespan / capacity as f32;
        Ok(Self {
            buffer,
            modifiers: Vec::new(),
            params,
            lifespan,
            release_interval,
            time_since_release: 0.0,
            rng: ParticleRng::new(0x9E37_79B9),
        })
    }

    /// Append a modifier to the pipeline. Order is significant and preserved.
    pub fn with_modifier(mut self, modifier: impl Modifier + 'static) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng = ParticleRng::new(seed);
        self
    }

    pub fn add_modifier(&mut self, modifier: Box<dyn Modifier>) {
        self.modifiers.push(modifier);
    }

    /// Advance the simulation by `elapsed` seconds, spawning new particles
    /// at `trigger` (which each particle keeps as its local-space anchor).
    pub fn update(&mut self, elapsed: f32, trigger: Vec2) {
        if elapsed <= 0.0 {
            return;
        }
        self.age_particles(elapsed);
        self.reclaim_expired();
        self.release_due(elapsed, trigger);
        self.run_modifiers(elapsed);
    }

    /// Read-only view of all live particles, oldest first, for renderers
    pub fn particles(&self) -> ParticleIter<'_> {
        self.buffer.iter()
    }

    pub fn count(&self) -> usize {
        self.buffer.count()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn available(&self) -> usize {
        self.buffer.available()
    }

    pub fn lifespan(&self) -> f32 {
        self.lifespan
    }

    fn age_particles(&mut self, elapsed: f32) {
        let delta = elapsed / self.lifespan;
        let mut cursor = self.buffer.iter_mut();
        while let Some(p) = cursor.next() {
            p.age = (p.age + delta).min(1.0);
        }
    }

    fn reclaim_expired(&mut self) {
        let expired = self.buffer.iter().take_while(|p| p.is_expired()).count();
        if expired > 0 {
            self.buffer.reclaim(expired);
        }
    }

    fn release_due(&mut self, elapsed: f32, trigger: Vec2) {
        self.time_since_release += elapsed;
        if self.time_since_release < self.release_interval {
            return;
        }
        let triggers = (self.time_since_release / self.release_interval).floor();
        self.time_since_release -= triggers * self.release_interval;

        let quantity = self.params.quantity.sample(&mut self.rng).max(0.0).floor() as usize;
        let requested = triggers as usize * quantity;
        if requested == 0 {
            return;
        }

        let available = self.buffer.available();
        if requested > available {
            log::trace!(
                "emitter saturated: dropping {} of {} requested particles",
                requested - available,
                requested
            );
        }

        let Self {
            buffer,
            params,
            rng,
            ..
        } = self;
        let mut cursor = buffer.release(requested);
        while let Some(p) = cursor.next() {
            p.position = trigger;
            p.trigger_pos = trigger;
            p.velocity = rng.unit_vector() * params.speed.sample(rng);
            p.age = 0.0;
            p.color = HslColor::new(
                params.hue.sample(rng),
                params.saturation.sample(rng),
                params.lightness.sample(rng),
            );
            p.opacity = params.opacity.sample(rng);
            p.scale = params.scale.sample(rng);
            p.rotation = params.rotation.sample(rng);
            p.mass = params.mass.sample(rng);
        }
    }

    fn run_modifiers(&mut self, elapsed: f32) {
        for modifier in &self.modifiers {
            let mut cursor = self.buffer.iter_mut();
            modifier.update(elapsed, &mut cursor);
        }
    }
}
