//! Dice pool construction and rolling.

use tracing::trace;

use super::roll::{DieResult, RollResult};
use super::{Die, RandomSource};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll all dice in the pool, in order, from the given source.
    pub fn roll(&self, source: &mut impl RandomSource) -> RollResult {
        let dice: Vec<DieResult> = self
            .dice
            .iter()
            .map(|die| DieResult {
                die: *die,
                value: source.roll_die(die.sides()),
            })
            .collect();
        let result = RollResult { dice };
        trace!(pool = %self, %result, "rolled pool");
        result
    }
}

impl std::fmt::Display for DicePool {
    /// Compact notation, grouping consecutive dice of one type: `4d6`, `2d6+1d4`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut groups: Vec<(Die, u32)> = Vec::new();
        for die in &self.dice {
            match groups.last_mut() {
                Some((last, n)) if last == die => *n += 1,
                _ => groups.push((*die, 1)),
            }
        }
        let parts: Vec<String> = groups.iter().map(|(die, n)| format!("{n}{die}")).collect();
        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RngSource, ScriptedDice};

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.to_string(), "");
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::D6, 2).add(Die::D4, 1);
        assert_eq!(pool.count(), 3);
        assert_eq!(pool.to_string(), "2d6+1d4");
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut source = RngSource::seeded(42);
        let pool = DicePool::new().add(Die::D6, 10);
        let result = pool.roll(&mut source);
        assert_eq!(result.count(), 10);
        for die_result in &result.dice {
            assert!((1..=6).contains(&die_result.value));
        }
    }

    #[test]
    fn roll_consumes_source_in_order() {
        let mut dice = ScriptedDice::new([2, 6, 3]);
        let result = DicePool::new().add(Die::D6, 3).roll(&mut dice);
        assert_eq!(result.values(), vec![2, 6, 3]);
        assert_eq!(result.total(), 11);
    }
}
