pub mod chart;
pub mod finances;
pub mod roll;
pub mod tables;

use pr_mechanics::RngSource;

/// A seeded source, or an OS-seeded one when no seed was given.
fn source_for(seed: Option<u64>) -> RngSource {
    seed.map_or_else(RngSource::from_entropy, RngSource::seeded)
}
