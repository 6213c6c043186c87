//! Fixed-capacity circular particle storage
//!
//! The buffer is a ring of `capacity + 1` slots; the spare slot keeps
//! `head == tail` unambiguous (always "empty", never "full"). `release`
//! advances the tail to hand out slots and `reclaim` advances the head to
//! free the oldest ones, so both are O(1) regardless of how many particles
//! move. Particles are never copied or compacted: a slot's contents stay
//! put from release to reclaim, and all traversal goes through short-lived
//! cursors that wrap at the physical end of storage.

use crate::particle::Particle;
use ember_core::{EmberError, Result};

/// Circular store of particle records with head/tail/count bookkeeping.
///
/// Storage is owned by the buffer for its whole lifetime and freed on drop;
/// cursors borrow the buffer and therefore cannot outlive it or overlap a
/// `release`/`reclaim` call.
pub struct ParticleBuffer {
    /// `capacity + 1` slots; the extra slot is the full/empty sentinel
    slots: Vec<Particle>,
    /// Index of the oldest live particle
    head: usize,
    /// Index one past the newest live particle
    tail: usize,
    /// Number of live particles
    count: usize,
}

impl ParticleBuffer {
    /// Allocate a buffer holding at most `capacity` live particles.
    ///
    /// The single backing allocation happens here and is never resized.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EmberError::InvalidCapacity(capacity));
        }
        let physical = capacity + 1;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(physical)
            .map_err(|_| EmberError::AllocationFailed { slots: physical })?;
        slots.resize(physical, Particle::dead());
        Ok(Self {
            slots,
            head: 0,
            tail: 0,
            count: 0,
        })
    }

    /// Maximum number of live particles
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Number of live particles
    pub fn count(&self) -> usize {
        self.count
    }

    /// Remaining slots before the buffer saturates
    pub fn available(&self) -> usize {
        self.capacity() - self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Allocate up to `requested` new slots at the tail, returning a cursor
    /// positioned at the first newly released slot so the caller can
    /// initialize exactly the new particles.
    ///
    /// Requests beyond `available()` clamp silently: a saturated buffer is
    /// back-pressure, not an error, and simply caps the number of live
    /// particles until reclamation frees capacity.
    pub fn release(&mut self, requested: usize) -> ParticleIterMut<'_> {
        let actual = requested.min(self.available());
        let offset = self.count;
        self.tail = (self.tail + actual) % self.slots.len();
        self.count += actual;
        let mut cursor = self.iter_mut();
        cursor.reset_at(offset);
        cursor
    }

    /// Free the `count` oldest live particles.
    ///
    /// The caller must have verified those particles are expired; this is a
    /// capacity primitive and performs no age checks.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of live particles. That can only
    /// come from a broken age scan, so it fails loudly instead of corrupting
    /// the head/count bookkeeping.
    pub fn reclaim(&mut self, count: usize) {
        assert!(
            count <= self.count,
            "reclaim of {count} particles exceeds live count {}",
            self.count
        );
        self.head = (self.head + count) % self.slots.len();
        self.count -= count;
    }

    /// Read-only traversal of all live particles, oldest first
    pub fn iter(&self) -> ParticleIter<'_> {
        ParticleIter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.count,
        }
    }

    /// Mutable cursor over all live particles, oldest first
    pub fn iter_mut(&mut self) -> ParticleIterMut<'_> {
        ParticleIterMut {
            head: self.head,
            tail: self.tail,
            cursor: self.head,
            slots: &mut self.slots,
        }
    }
}

/// Read-only iterator over live particles in release (FIFO) order
pub struct ParticleIter<'a> {
    slots: &'a [Particle],
    cursor: usize,
    remaining: usize,
}

impl<'a> Iterator for ParticleIter<'a> {
    type Item = &'a Particle;

    fn next(&mut self) -> Option<&'a Particle> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();
        self.remaining -= 1;
        Some(&self.slots[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ParticleIter<'_> {}

/// Forward-only mutable cursor over live particles.
///
/// Yields one particle at a time via the lending `next`; restartable with
/// `reset` (back to the oldest particle) or `reset_at` (skip the first
/// `offset` live particles, which is how `release` hands back only the
/// newly created slice). Borrows the buffer for its whole life, so it must
/// be dropped before the next `release`/`reclaim` and re-acquired each
/// frame.
pub struct ParticleIterMut<'a> {
    slots: &'a mut [Particle],
    head: usize,
    tail: usize,
    cursor: usize,
}

impl ParticleIterMut<'_> {
    /// Whether another call to `next` will yield a particle
    pub fn has_next(&self) -> bool {
        self.cursor != self.tail
    }

    /// The next live particle, wrapping past the physical end of storage
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut Particle> {
        if self.cursor == self.tail {
            return None;
        }
        let i = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();
        Some(&mut self.slots[i])
    }

    /// Restart at the oldest live particle
    pub fn reset(&mut self) {
        self.cursor = self.head;
    }

    /// Restart `offset` live particles past the oldest one.
    ///
    /// `offset` must not exceed the live count the cursor was created with.
    pub fn reset_at(&mut self, offset: usize) {
        self.cursor = (self.head + offset) % self.slots.len();
    }
}
