//! The eight Palladium attributes and how their scores are rolled.
//!
//! A score is a base roll (3d6, or 4d6 dropping the lowest die) plus up to
//! two exploding bonus dice. Bonus dice are granted when the *base* total
//! lands in 16-18; a bonus die showing 6 earns exactly one more.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DicePool, Die, RandomSource};
use crate::error::{MechError, MechResult};

/// Base totals that earn a bonus die.
pub const BONUS_TRIGGER: std::ops::RangeInclusive<u32> = 16..=18;

/// Hard limit on bonus dice per attribute.
pub const MAX_BONUS_DICE: usize = 2;

/// One of the eight Palladium attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(clippy::upper_case_acronyms)]
pub enum Attribute {
    /// Intelligence Quotient.
    IQ,
    /// Mental Endurance.
    ME,
    /// Mental Affinity.
    MA,
    /// Physical Strength.
    PS,
    /// Physical Prowess.
    PP,
    /// Physical Endurance.
    PE,
    /// Physical Beauty.
    PB,
    /// Speed.
    SPD,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Self; 8] = [
        Self::IQ,
        Self::ME,
        Self::MA,
        Self::PS,
        Self::PP,
        Self::PE,
        Self::PB,
        Self::SPD,
    ];

    /// The short label printed on the sheet.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::IQ => "IQ",
            Self::ME => "ME",
            Self::MA => "MA",
            Self::PS => "PS",
            Self::PP => "PP",
            Self::PE => "PE",
            Self::PB => "PB",
            Self::SPD => "SPD",
        }
    }

    /// The full attribute name.
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::IQ => "Intelligence Quotient",
            Self::ME => "Mental Endurance",
            Self::MA => "Mental Affinity",
            Self::PS => "Physical Strength",
            Self::PP => "Physical Prowess",
            Self::PE => "Physical Endurance",
            Self::PB => "Physical Beauty",
            Self::SPD => "Speed",
        }
    }

    /// Parse an attribute from its abbreviation (case-insensitive).
    pub fn parse(s: &str) -> MechResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.abbreviation().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MechError::UnknownAttribute(s.to_string()))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl std::str::FromStr for Attribute {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        Self::parse(s)
    }
}

/// How the base of each attribute is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatMode {
    /// Sum of three d6.
    #[default]
    ThreeD6,
    /// Roll four d6, drop the lowest, sum the other three.
    FourD6DropLowest,
}

impl StatMode {
    /// The dice rolled for the base total, before any drop.
    pub fn base_pool(self) -> DicePool {
        match self {
            Self::ThreeD6 => DicePool::new().add(Die::D6, 3),
            Self::FourD6DropLowest => DicePool::new().add(Die::D6, 4),
        }
    }

    /// Parse a stat mode from user input such as `3d6` or `4d6`.
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "3d6" | "three-d6" | "threed6" => Ok(Self::ThreeD6),
            "4d6" | "4d6-drop-lowest" | "4d6dl" | "four-d6" | "fourd6droplowest" => {
                Ok(Self::FourD6DropLowest)
            }
            _ => Err(MechError::InvalidStatMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for StatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThreeD6 => write!(f, "3d6"),
            Self::FourD6DropLowest => write!(f, "4d6 drop lowest"),
        }
    }
}

impl std::str::FromStr for StatMode {
    type Err = MechError;

    fn from_str(s: &str) -> MechResult<Self> {
        Self::parse(s)
    }
}

/// The full record of one attribute roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRoll {
    /// The base dice that count toward the total.
    pub base_dice: Vec<u32>,
    /// The die discarded in 4d6-drop-lowest mode.
    pub dropped: Option<u32>,
    /// Bonus dice added after the base (zero to two).
    pub bonus_dice: Vec<u32>,
}

impl AttributeRoll {
    /// Total before bonus dice.
    pub fn base(&self) -> u32 {
        self.base_dice.iter().sum()
    }

    /// The final attribute score.
    pub fn total(&self) -> u32 {
        self.base() + self.bonus_dice.iter().sum::<u32>()
    }
}

/// Roll one attribute score under `mode`.
pub fn roll_attribute(mode: StatMode, source: &mut impl RandomSource) -> AttributeRoll {
    let rolled = mode.base_pool().roll(source);
    let (base_dice, dropped) = match mode {
        StatMode::ThreeD6 => (rolled.values(), None),
        StatMode::FourD6DropLowest => match rolled.drop_lowest() {
            Some((dropped, kept)) => (kept, Some(dropped)),
            None => (Vec::new(), None),
        },
    };

    let base: u32 = base_dice.iter().sum();
    let mut bonus_dice = Vec::with_capacity(MAX_BONUS_DICE);
    if BONUS_TRIGGER.contains(&base) {
        let first = source.roll_die(Die::D6.sides());
        bonus_dice.push(first);
        if first == Die::D6.sides() {
            bonus_dice.push(source.roll_die(Die::D6.sides()));
        }
    }

    let roll = AttributeRoll {
        base_dice,
        dropped,
        bonus_dice,
    };
    debug!(%mode, base, bonus = ?roll.bonus_dice, total = roll.total(), "rolled attribute");
    roll
}
