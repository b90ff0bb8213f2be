//! Dice types, random sources, pools, and rolling.
//!
//! Every roll in the generator goes through a [`RandomSource`]. Production
//! code wraps a `rand` generator in [`RngSource`]; tests replay fixed faces
//! with [`ScriptedDice`].

pub mod pool;
pub mod roll;
pub mod source;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};
pub use source::{RngSource, ScriptedDice};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub const fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D4 => write!(f, "d4"),
            Self::D6 => write!(f, "d6"),
            Self::D8 => write!(f, "d8"),
            Self::D10 => write!(f, "d10"),
            Self::D12 => write!(f, "d12"),
            Self::D20 => write!(f, "d20"),
            Self::D100 => write!(f, "d100"),
            Self::Custom(n) => write!(f, "d{n}"),
        }
    }
}

/// A source of uniform dice rolls.
///
/// Implementors only supply [`roll_die`](Self::roll_die); multi-die sums and
/// the percentile die are built on top of it.
pub trait RandomSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Sum of `count` independent rolls of a `sides`-faced die.
    fn roll_dice(&mut self, count: u32, sides: u32) -> u32 {
        (0..count).map(|_| self.roll_die(sides)).sum()
    }

    /// Roll percentile dice, returning a value in `1..=100`.
    ///
    /// A "00" reading is already covered as 100.
    fn roll_percentile(&mut self) -> u32 {
        self.roll_die(Die::D100.sides())
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn roll_die(&mut self, sides: u32) -> u32 {
        (**self).roll_die(sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D8.sides(), 8);
        assert_eq!(Die::D10.sides(), 10);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D20.sides(), 20);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::Custom(30).sides(), 30);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D6.to_string(), "d6");
        assert_eq!(Die::D100.to_string(), "d100");
        assert_eq!(Die::Custom(30).to_string(), "d30");
    }

    #[test]
    fn roll_dice_sums_script() {
        let mut dice = ScriptedDice::new([2, 5, 6]);
        assert_eq!(dice.roll_dice(3, 6), 13);
        assert!(dice.is_exhausted());
    }

    #[test]
    fn percentile_uses_d100() {
        let mut dice = ScriptedDice::new([100]);
        assert_eq!(dice.roll_percentile(), 100);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn take(mut source: impl RandomSource) -> u32 {
            source.roll_die(6)
        }
        let mut dice = ScriptedDice::new([4, 3]);
        assert_eq!(take(&mut dice), 4);
        assert_eq!(dice.roll_die(6), 3);
    }
}
