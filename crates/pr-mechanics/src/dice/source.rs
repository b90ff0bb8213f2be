//! Concrete random sources.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::RandomSource;

/// A [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// A reproducible source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// A [`RandomSource`] that replays a fixed list of die faces.
///
/// Each call to `roll_die` consumes the next face, whatever die is being
/// rolled. Used to pin generation to a known sequence in tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedDice {
    /// Create a script from the faces to return, in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of faces not yet rolled.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    /// Number of faces rolled so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// True once every scripted face has been rolled.
    pub fn is_exhausted(&self) -> bool {
        self.faces.is_empty()
    }
}

impl RandomSource for ScriptedDice {
    /// # Panics
    ///
    /// Panics if the script is exhausted or the next face does not fit on a
    /// die with `sides` faces.
    fn roll_die(&mut self, sides: u32) -> u32 {
        let Some(face) = self.faces.pop_front() else {
            panic!(
                "scripted dice exhausted after {} rolls (wanted a d{sides})",
                self.consumed
            );
        };
        assert!(
            (1..=sides).contains(&face),
            "scripted face {face} at position {} does not fit a d{sides}",
            self.consumed
        );
        self.consumed += 1;
        face
    }
}
