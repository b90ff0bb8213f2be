//! Character assembly.
//!
//! Rolls happen in a fixed order: the eight attributes (IQ through SPD),
//! then the animal category and animal, then the background, then the
//! background's finances. Only finances depend on an earlier result.

use pr_mechanics::{Attribute, AttributeRoll, RandomSource, RngSource, StatMode, roll_attribute};
use pr_tables::{
    AnimalResult, BackgroundResult, FinanceResult, generate_animal, generate_background,
    resolve_finances,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::SheetResult;

/// One attribute with its final score and the dice behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolledAttribute {
    /// Which attribute.
    pub attribute: Attribute,
    /// The final score, bonus dice included.
    pub score: u32,
    /// The dice that produced the score.
    pub roll: AttributeRoll,
}

/// A complete generated character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    /// Optional display name.
    pub name: Option<String>,
    /// The base-roll method used for attributes.
    pub stat_mode: StatMode,
    /// The eight attributes in sheet order.
    pub attributes: Vec<RolledAttribute>,
    /// Animal type.
    pub animal: AnimalResult,
    /// Mutant background.
    pub background: BackgroundResult,
    /// Starting finances for the background.
    pub finances: FinanceResult,
}

impl CharacterSheet {
    /// The rolled entry for an attribute.
    pub fn attribute(&self, attribute: Attribute) -> Option<&RolledAttribute> {
        self.attributes.iter().find(|a| a.attribute == attribute)
    }

    /// The score for an attribute (0 if absent).
    pub fn score(&self, attribute: Attribute) -> u32 {
        self.attribute(attribute).map_or(0, |a| a.score)
    }

    /// True if any score is above the bonus chart.
    pub fn any_capped(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| pr_mechanics::bonus::is_capped(a.score))
    }
}

/// Generate one unnamed character.
pub fn generate_character(
    stat_mode: StatMode,
    source: &mut impl RandomSource,
) -> SheetResult<CharacterSheet> {
    let mut attributes = Vec::with_capacity(Attribute::ALL.len());
    for attribute in Attribute::ALL {
        let roll = roll_attribute(stat_mode, source);
        attributes.push(RolledAttribute {
            attribute,
            score: roll.total(),
            roll,
        });
    }

    let animal = generate_animal(source)?;
    let background = generate_background(source)?;
    let finances = resolve_finances(&background.background, source);
    debug!(
        animal = %animal.animal,
        background = %background.background,
        money = ?finances.money,
        "assembled character"
    );

    Ok(CharacterSheet {
        name: None,
        stat_mode,
        attributes,
        animal,
        background,
        finances,
    })
}

/// Generates sheets from a config and an owned random source.
#[derive(Debug)]
pub struct Generator<S = RngSource> {
    config: GeneratorConfig,
    source: S,
}

impl Generator<RngSource> {
    /// A generator seeded from the config (or the OS if no seed is set).
    pub fn new(config: GeneratorConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self { config, source }
    }
}

impl<S: RandomSource> Generator<S> {
    /// A generator that draws from an explicit source, ignoring the seed.
    pub fn with_source(config: GeneratorConfig, source: S) -> Self {
        Self { config, source }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a character. Successive calls give independent sheets.
    pub fn generate(&mut self) -> SheetResult<CharacterSheet> {
        info!(mode = %self.config.stat_mode, seed = ?self.config.seed, "generating character");
        let mut sheet = generate_character(self.config.stat_mode, &mut self.source)?;
        sheet.name.clone_from(&self.config.name);
        Ok(sheet)
    }
}
