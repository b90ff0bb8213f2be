//! Palladium attribute bonus chart.
//!
//! Bonuses start at a score of 16 and the chart stops at 30: every lookup
//! clamps the score to 30 first, and any score below 16 yields 0, meaning
//! no effect. Three rows (MA, PE coma/death, PB) are not formulaic and are
//! stored as literal tables indexed from 16.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Lowest score that earns any bonus.
pub const CHART_FLOOR: u32 = 16;

/// Highest score the chart covers; higher scores use this row.
pub const CHART_CEILING: u32 = 30;

/// MA trust/intimidate percentage for scores 16..=30.
pub const MA_TRUST_INTIMIDATE: [u32; 15] =
    [40, 45, 50, 55, 60, 65, 70, 75, 80, 84, 88, 92, 94, 96, 97];

/// PE save vs coma/death percentage for scores 16..=30.
pub const PE_COMA_DEATH: [u32; 15] = [4, 5, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];

/// PB charm/impress percentage for scores 16..=30.
pub const PB_CHARM_IMPRESS: [u32; 15] =
    [30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 83, 86, 90, 92];

/// Cap a score at the top of the chart.
pub fn clamp_for_chart(score: u32) -> u32 {
    score.min(CHART_CEILING)
}

/// True when the raw score is above the chart and its bonuses were capped.
pub fn is_capped(score: u32) -> bool {
    score > CHART_CEILING
}

/// The clamped score, or `None` below the chart.
fn on_chart(score: u32) -> Option<u32> {
    (score >= CHART_FLOOR).then(|| clamp_for_chart(score))
}

fn from_table(table: &[u32; 15], score: u32) -> u32 {
    on_chart(score).map_or(0, |s| table[(s - CHART_FLOOR) as usize])
}

/// IQ skill bonus percentage: 16 gives +2% up to +16% at 30.
pub fn iq_skill_bonus(score: u32) -> u32 {
    on_chart(score).map_or(0, |s| s - 14)
}

/// The "+1 per two points" row: 16-17 give +1, 18-19 give +2, 30 gives +8.
pub fn step_every_two(score: u32) -> u32 {
    on_chart(score).map_or(0, |s| (s - 14) / 2)
}

/// ME save vs insanity.
///
/// Follows the two-point step through 20 (+3), then jumps to one point per
/// score from 21 (+4) up to 30 (+13).
pub fn me_insanity_bonus(score: u32) -> u32 {
    match on_chart(score) {
        None => 0,
        Some(s) if s <= 20 => (s - 14) / 2,
        Some(s) => s - 17,
    }
}

/// PS damage bonus: 16 gives +1 up to +15 at 30.
pub fn ps_damage_bonus(score: u32) -> u32 {
    on_chart(score).map_or(0, |s| s - 15)
}

/// MA trust/intimidate percentage.
pub fn ma_trust_intimidate(score: u32) -> u32 {
    from_table(&MA_TRUST_INTIMIDATE, score)
}

/// PE save vs coma/death percentage.
pub fn pe_coma_death(score: u32) -> u32 {
    from_table(&PE_COMA_DEATH, score)
}

/// PB charm/impress percentage.
pub fn pb_charm_impress(score: u32) -> u32 {
    from_table(&PB_CHARM_IMPRESS, score)
}

/// How a bonus value is written on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusStyle {
    /// A flat modifier, `+3`.
    Plus,
    /// A percentage modifier, `+4%`.
    PlusPercent,
    /// An absolute percentage chance, `40%`.
    Percent,
}

/// A derived game effect of an attribute score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusEffect {
    /// IQ: bonus to all skill percentages.
    Skills,
    /// ME: save vs psionic attack.
    SaveVsPsionic,
    /// ME: save vs insanity.
    SaveVsInsanity,
    /// MA: chance to invoke trust or intimidation.
    TrustIntimidate,
    /// PS: hand-to-hand damage.
    Damage,
    /// PP: parry and dodge.
    ParryDodge,
    /// PP: strike.
    Strike,
    /// PE: save vs coma/death.
    SaveVsComaDeath,
    /// PE: save vs magic and poison.
    SaveVsMagicPoison,
    /// PB: chance to charm or impress.
    CharmImpress,
}

impl BonusEffect {
    /// The sheet label for this effect.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::SaveVsPsionic => "Save vs Psionic",
            Self::SaveVsInsanity => "Save vs Insanity",
            Self::TrustIntimidate => "Trust/Intimidate",
            Self::Damage => "Damage",
            Self::ParryDodge => "Parry/Dodge",
            Self::Strike => "Strike",
            Self::SaveVsComaDeath => "Save vs Coma/Death",
            Self::SaveVsMagicPoison => "Save vs Magic/Poison",
            Self::CharmImpress => "Charm/Impress",
        }
    }

    /// How this effect's value is written.
    pub const fn style(self) -> BonusStyle {
        match self {
            Self::Skills | Self::SaveVsComaDeath => BonusStyle::PlusPercent,
            Self::TrustIntimidate | Self::CharmImpress => BonusStyle::Percent,
            Self::SaveVsPsionic
            | Self::SaveVsInsanity
            | Self::Damage
            | Self::ParryDodge
            | Self::Strike
            | Self::SaveVsMagicPoison => BonusStyle::Plus,
        }
    }

    /// The chart formula for this effect.
    pub fn formula(self) -> fn(u32) -> u32 {
        match self {
            Self::Skills => iq_skill_bonus,
            Self::SaveVsPsionic | Self::ParryDodge | Self::Strike | Self::SaveVsMagicPoison => {
                step_every_two
            }
            Self::SaveVsInsanity => me_insanity_bonus,
            Self::TrustIntimidate => ma_trust_intimidate,
            Self::Damage => ps_damage_bonus,
            Self::SaveVsComaDeath => pe_coma_death,
            Self::CharmImpress => pb_charm_impress,
        }
    }

    /// Evaluate this effect for a raw score (0 means no effect).
    pub fn value(self, score: u32) -> u32 {
        (self.formula())(score)
    }
}

/// A non-zero bonus derived from an attribute score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    /// What the bonus applies to.
    pub effect: BonusEffect,
    /// The bonus amount.
    pub value: u32,
}

impl Bonus {
    /// The value as written on the sheet, without the label: `+3`, `+4%`, `40%`.
    pub fn value_text(&self) -> String {
        let value = self.value;
        match self.effect.style() {
            BonusStyle::Plus => format!("+{value}"),
            BonusStyle::PlusPercent => format!("+{value}%"),
            BonusStyle::Percent => format!("{value}%"),
        }
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.effect.label(), self.value_text())
    }
}

impl Attribute {
    /// The chart effects this attribute grants, in sheet order.
    pub const fn effects(self) -> &'static [BonusEffect] {
        match self {
            Self::IQ => &[BonusEffect::Skills],
            Self::ME => &[BonusEffect::SaveVsPsionic, BonusEffect::SaveVsInsanity],
            Self::MA => &[BonusEffect::TrustIntimidate],
            Self::PS => &[BonusEffect::Damage],
            Self::PP => &[BonusEffect::ParryDodge, BonusEffect::Strike],
            Self::PE => &[BonusEffect::SaveVsComaDeath, BonusEffect::SaveVsMagicPoison],
            Self::PB => &[BonusEffect::CharmImpress],
            Self::SPD => &[],
        }
    }

    /// Every non-zero bonus for `score`.
    pub fn bonuses(self, score: u32) -> Vec<Bonus> {
        self.effects()
            .iter()
            .map(|&effect| Bonus {
                effect,
                value: effect.value(score),
            })
            .filter(|b| b.value > 0)
            .collect()
    }
}
