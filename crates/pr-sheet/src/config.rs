//! Configuration for character generation.

use pr_mechanics::StatMode;

/// Configuration for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base-roll method for attributes.
    pub stat_mode: StatMode,
    /// RNG seed for reproducible sheets; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Display name printed at the top of the sheet.
    pub name: Option<String>,
}

impl GeneratorConfig {
    /// Set the attribute base-roll method.
    pub fn with_mode(mut self, stat_mode: StatMode) -> Self {
        self.stat_mode = stat_mode;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the display name. Blank names are ignored.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        self.name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}
