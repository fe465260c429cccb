//! Random sources for die throws and enemy stat rolls.
//!
//! The store never touches an RNG directly; it asks a [`RandomSource`] for an
//! inclusive range. Production uses [`ThreadRandom`] or [`SeededRandom`];
//! tests script exact values with [`ScriptedRandom`].

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on the battle die.
pub const DIE_FACES: i32 = 6;

/// Uniform integer source over inclusive ranges.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Draw a value in `low..=high`. Callers guarantee `low <= high`.
    fn roll(&self, low: i32, high: i32) -> i32;
}

/// Throw the battle die.
#[must_use]
pub fn throw_die(source: &dyn RandomSource) -> u8 {
    let face = source.roll(1, DIE_FACES).clamp(1, DIE_FACES);
    u8::try_from(face).unwrap_or(1)
}

/// Thread-local entropy via `rand::thread_rng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn roll(&self, low: i32, high: i32) -> i32 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic source: the same seed yields the same sequence of rolls.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom").finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn roll(&self, low: i32, high: i32) -> i32 {
        self.rng.lock().gen_range(low..=high)
    }
}

/// Replays queued values in order.
///
/// Each value is clamped into the requested range. Once the queue is empty
/// every roll returns the range's low bound.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    values: Mutex<VecDeque<i32>>,
}

impl ScriptedRandom {
    /// Create a source that will return `values` in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Append more values to the end of the script.
    pub fn push(&self, values: impl IntoIterator<Item = i32>) {
        self.values.lock().extend(values);
    }

    /// Number of values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.lock().len()
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&self, low: i32, high: i32) -> i32 {
        self.values
            .lock()
            .pop_front()
            .map_or(low, |v| v.clamp(low, high))
    }
}
