//! Mutant background (Road Hogs step 3).

use pr_mechanics::RandomSource;
use serde::{Deserialize, Serialize};

use crate::error::TableResult;
use crate::table::{RangeEntry, RangeTable, resolve};

/// The mutant background table.
pub static MUTANT_BACKGROUNDS: RangeTable = RangeTable {
    slug: "backgrounds",
    title: "Mutant Backgrounds",
    entries: &[
        RangeEntry::new(1, 15, "Mechanic"),
        RangeEntry::new(16, 35, "Biker"),
        RangeEntry::new(36, 45, "Trooper"),
        RangeEntry::new(46, 55, "Feral Mutant Animal"),
        RangeEntry::new(56, 75, "Ninja"),
        RangeEntry::new(76, 85, "Trucker"),
        RangeEntry::new(86, 95, "Highway Engineer"),
        RangeEntry::new(96, 100, "Natural Mechanical Genius"),
    ],
};

/// At-a-glance summary for each background.
pub static BACKGROUND_SUMMARIES: [(&str, &str); 8] = [
    (
        "Mechanic",
        "Garage-trained; strong repair/diagnostics focus; significant vehicle expense.",
    ),
    (
        "Biker",
        "Biker-gang upbringing; piloting & combat skills; often revenge-motivated.",
    ),
    (
        "Trooper",
        "Road Patrol tradition; military-style training; law & order focus.",
    ),
    (
        "Feral Mutant Animal",
        "Wilderness survivor; tougher/rougher; no vehicle expense.",
    ),
    (
        "Ninja",
        "Adopted into a ninja school; stealth & martial training; weapon proficiencies.",
    ),
    (
        "Trucker",
        "Armed convoy specialist; freight/semi piloting; practical combat training.",
    ),
    (
        "Highway Engineer",
        "Roads/bridges/tunnels specialist; engineering & heavy machinery; respected trade.",
    ),
    (
        "Natural Mechanical Genius",
        "Innate machine intuition; fixes are perfect but may only last while nearby.",
    ),
];

/// The summary for a background label, if it has one.
pub fn background_summary(background: &str) -> Option<&'static str> {
    BACKGROUND_SUMMARIES
        .iter()
        .find(|(name, _)| *name == background)
        .map(|(_, summary)| *summary)
}

/// A generated background with its roll and summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundResult {
    /// The d100 rolled on the background table.
    pub roll: u32,
    /// The resolved background.
    pub background: String,
    /// Flavor summary (empty if none is authored).
    pub summary: String,
}

/// Resolve a background from its percentile roll.
pub fn background_from_roll(roll: u32) -> TableResult<BackgroundResult> {
    let background = resolve(roll, &MUTANT_BACKGROUNDS)?;
    Ok(BackgroundResult {
        roll,
        background: background.to_string(),
        summary: background_summary(background).unwrap_or_default().to_string(),
    })
}

/// Roll a random background.
pub fn generate_background(source: &mut impl RandomSource) -> TableResult<BackgroundResult> {
    background_from_roll(source.roll_percentile())
}
