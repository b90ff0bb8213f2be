//! Starting finances by mutant background.
//!
//! Every background has one money rule (a dice formula or a fixed amount)
//! and, independently, a fixed vehicle budget or none at all.

use pr_mechanics::{DicePool, Die, RandomSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TableError, TableResult};

/// How a background's personal money is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinanceRule {
    /// Roll `count` dice, multiply the sum, then add the offset.
    Dice {
        /// Number of dice.
        count: u32,
        /// Die type.
        die: Die,
        /// Multiplier applied to the dice total.
        multiplier: i64,
        /// Added after multiplying.
        offset: i64,
    },
    /// A fixed amount with no roll.
    Fixed(i64),
}

impl FinanceRule {
    /// A dice rule with no offset.
    pub const fn dice(count: u32, die: Die, multiplier: i64) -> Self {
        Self::Dice {
            count,
            die,
            multiplier,
            offset: 0,
        }
    }
}

impl std::fmt::Display for FinanceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Dice {
                count,
                die,
                multiplier,
                offset,
            } => write!(f, "{count}{die}{}", modifiers(multiplier, offset)),
            Self::Fixed(amount) => write!(f, "fixed {amount}"),
        }
    }
}

/// The `× m + o` tail of a dice formula, omitting identity parts.
fn modifiers(multiplier: i64, offset: i64) -> String {
    let mut out = String::new();
    if multiplier != 1 {
        out.push_str(&format!(" × {multiplier}"));
    }
    match offset.cmp(&0) {
        std::cmp::Ordering::Greater => out.push_str(&format!(" + {offset}")),
        std::cmp::Ordering::Less => out.push_str(&format!(" - {}", offset.unsigned_abs())),
        std::cmp::Ordering::Equal => {}
    }
    out
}

/// The finance configuration of one background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinanceProfile {
    /// Background label, as produced by the background table.
    pub background: &'static str,
    /// Personal money rule.
    pub money: FinanceRule,
    /// Vehicle budget; `None` means the background gets no vehicle.
    pub vehicle_expense: Option<u32>,
    /// Extra guidance shown with the result.
    pub note: Option<&'static str>,
}

/// Finance rules for every mutant background.
pub static FINANCE_PROFILES: [FinanceProfile; 8] = [
    FinanceProfile {
        background: "Mechanic",
        money: FinanceRule::dice(3, Die::D6, 100),
        vehicle_expense: Some(20_000),
        note: None,
    },
    FinanceProfile {
        background: "Biker",
        money: FinanceRule::dice(2, Die::D6, 100),
        vehicle_expense: Some(15_000),
        note: None,
    },
    FinanceProfile {
        background: "Trooper",
        money: FinanceRule::dice(1, Die::D6, 300),
        vehicle_expense: Some(10_000),
        note: None,
    },
    FinanceProfile {
        background: "Feral Mutant Animal",
        money: FinanceRule::dice(1, Die::D6, 10),
        vehicle_expense: None,
        note: Some("Raised in the wild; no vehicle budget."),
    },
    FinanceProfile {
        background: "Ninja",
        money: FinanceRule::Fixed(500),
        vehicle_expense: Some(5_000),
        note: None,
    },
    FinanceProfile {
        background: "Trucker",
        money: FinanceRule::Dice {
            count: 2,
            die: Die::D6,
            multiplier: 100,
            offset: 200,
        },
        vehicle_expense: Some(25_000),
        note: None,
    },
    FinanceProfile {
        background: "Highway Engineer",
        money: FinanceRule::dice(4, Die::D6, 100),
        vehicle_expense: Some(12_000),
        note: None,
    },
    FinanceProfile {
        background: "Natural Mechanical Genius",
        money: FinanceRule::Fixed(1_000),
        vehicle_expense: Some(8_000),
        note: Some("Vehicle budget covers salvage and parts; labor is free."),
    },
];

/// The finance profile for a background label, matched ignoring ASCII case.
pub fn finance_profile(background: &str) -> TableResult<&'static FinanceProfile> {
    FINANCE_PROFILES
        .iter()
        .find(|p| p.background.eq_ignore_ascii_case(background.trim()))
        .ok_or_else(|| TableError::UnconfiguredBackground(background.to_string()))
}

/// Resolved starting finances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceResult {
    /// Personal money, if a rule applied.
    pub money: Option<i64>,
    /// Raw dice total for dice rules.
    pub dice_total: Option<u32>,
    /// How the money was derived, e.g. `1d6 (4) × 300 = 1200`.
    pub trace: Option<String>,
    /// Extra guidance or the reason nothing was resolved.
    pub note: Option<String>,
    /// Vehicle budget; `None` means no vehicle.
    pub vehicle_expense: Option<u32>,
}

/// Roll starting finances for a background.
///
/// An unknown background does not fail: the result is empty and its note
/// explains why.
pub fn resolve_finances(background: &str, source: &mut impl RandomSource) -> FinanceResult {
    let profile = match finance_profile(background) {
        Ok(profile) => profile,
        Err(e) => {
            warn!(background, "{e}");
            return FinanceResult {
                note: Some(e.to_string()),
                ..FinanceResult::default()
            };
        }
    };

    let (money, dice_total, trace) = match profile.money {
        FinanceRule::Dice {
            count,
            die,
            multiplier,
            offset,
        } => {
            let total = DicePool::new().add(die, count).roll(source).total();
            let money = i64::from(total) * multiplier + offset;
            let trace = format!(
                "{count}{die} ({total}){} = {money}",
                modifiers(multiplier, offset)
            );
            (money, Some(total), trace)
        }
        FinanceRule::Fixed(amount) => (amount, None, format!("fixed {amount}")),
    };

    debug!(background, money, vehicle = ?profile.vehicle_expense, "resolved finances");
    FinanceResult {
        money: Some(money),
        dice_total,
        trace: Some(trace),
        note: profile.note.map(str::to_string),
        vehicle_expense: profile.vehicle_expense,
    }
}

/// Lowest and highest money a rule can produce.
pub fn money_range(rule: FinanceRule) -> (i64, i64) {
    match rule {
        FinanceRule::Dice {
            count,
            die,
            multiplier,
            offset,
        } => {
            let low = i64::from(count) * multiplier + offset;
            let high = i64::from(count * die.sides()) * multiplier + offset;
            (low.min(high), low.max(high))
        }
        FinanceRule::Fixed(amount) => (amount, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::MUTANT_BACKGROUNDS;
    use pr_mechanics::{RngSource, ScriptedDice};
    use proptest::prelude::*;

    #[test]
    fn every_background_is_configured() {
        for label in MUTANT_BACKGROUNDS.labels() {
            assert!(finance_profile(label).is_ok(), "{label}");
        }
        assert_eq!(FINANCE_PROFILES.len(), MUTANT_BACKGROUNDS.entries.len());
    }

    #[test]
    fn trooper_rolls_d6_times_300() {
        let mut dice = ScriptedDice::new([4]);
        let result = resolve_finances("Trooper", &mut dice);
        assert_eq!(result.money, Some(1200));
        assert_eq!(result.dice_total, Some(4));
        assert_eq!(result.trace.as_deref(), Some("1d6 (4) × 300 = 1200"));
        assert_eq!(result.vehicle_expense, Some(10_000));
        assert_eq!(result.note, None);
    }

    #[test]
    fn trucker_applies_offset_after_multiplier() {
        let mut dice = ScriptedDice::new([3, 5]);
        let result = resolve_finances("Trucker", &mut dice);
        assert_eq!(result.money, Some(1000));
        assert_eq!(result.trace.as_deref(), Some("2d6 (8) × 100 + 200 = 1000"));
    }

    #[test]
    fn fixed_rule_rolls_nothing() {
        let mut dice = ScriptedDice::default();
        let result = resolve_finances("Ninja", &mut dice);
        assert_eq!(result.money, Some(500));
        assert_eq!(result.dice_total, None);
        assert_eq!(result.trace.as_deref(), Some("fixed 500"));
        assert_eq!(result.vehicle_expense, Some(5_000));
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn feral_has_no_vehicle() {
        let mut source = RngSource::seeded(3);
        let result = resolve_finances("Feral Mutant Animal", &mut source);
        assert_eq!(result.vehicle_expense, None);
        assert!(result.money.is_some());
        assert!(result.note.is_some());
    }

    #[test]
    fn unknown_background_is_empty_with_note() {
        let mut dice = ScriptedDice::default();
        let result = resolve_finances("Astronaut", &mut dice);
        assert_eq!(result.money, None);
        assert_eq!(result.trace, None);
        assert_eq!(result.vehicle_expense, None);
        assert_eq!(
            result.note.as_deref(),
            Some("no finance rule configured for background 'Astronaut'")
        );
    }

    #[test]
    fn rule_display() {
        assert_eq!(FinanceRule::dice(3, Die::D6, 100).to_string(), "3d6 × 100");
        assert_eq!(FinanceRule::Fixed(500).to_string(), "fixed 500");
        assert_eq!(
            FinanceRule::Dice {
                count: 2,
                die: Die::D6,
                multiplier: 100,
                offset: 200
            }
            .to_string(),
            "2d6 × 100 + 200"
        );
        assert_eq!(FinanceRule::dice(1, Die::D4, 1).to_string(), "1d4");
    }

    #[test]
    fn profile_lookup_ignores_case() {
        assert_eq!(finance_profile("trooper").unwrap().background, "Trooper");
        assert_eq!(
            finance_profile(" feral mutant animal ").unwrap().background,
            "Feral Mutant Animal"
        );
        assert!(matches!(
            finance_profile("Astronaut"),
            Err(TableError::UnconfiguredBackground(name)) if name == "Astronaut"
        ));
    }

    #[test]
    fn ranges() {
        let trooper = finance_profile("Trooper").unwrap();
        assert_eq!(money_range(trooper.money), (300, 1800));
        assert_eq!(money_range(FinanceRule::Fixed(7)), (7, 7));
    }

    proptest! {
        #[test]
        fn trooper_money_in_range(seed in any::<u64>()) {
            let mut source = RngSource::seeded(seed);
            let result = resolve_finances("Trooper", &mut source);
            let money = result.money.unwrap();
            prop_assert!((300..=1800).contains(&money));
            prop_assert_eq!(money % 300, 0);
            prop_assert_eq!(result.vehicle_expense, Some(10_000));
        }

        #[test]
        fn every_profile_stays_in_its_range(seed in any::<u64>(), index in 0usize..8) {
            let profile = &FINANCE_PROFILES[index];
            let mut source = RngSource::seeded(seed);
            let result = resolve_finances(profile.background, &mut source);
            let (low, high) = money_range(profile.money);
            let money = result.money.unwrap();
            prop_assert!(low <= money && money <= high);
            prop_assert_eq!(result.vehicle_expense, profile.vehicle_expense);
        }
    }
}
