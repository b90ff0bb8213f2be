//! Game mechanics for Palladium Roller.
//!
//! Provides the random source abstraction and dice vocabulary, the
//! attribute roller with its exploding bonus dice, and the Palladium
//! attribute bonus chart (scores 16 through 30).

pub mod attribute;
pub mod bonus;
pub mod dice;
pub mod error;

pub use attribute::{Attribute, AttributeRoll, StatMode, roll_attribute};
pub use bonus::{Bonus, BonusEffect, BonusStyle};
pub use dice::{DicePool, Die, RandomSource, RngSource, RollResult, ScriptedDice};
pub use error::{MechError, MechResult};
