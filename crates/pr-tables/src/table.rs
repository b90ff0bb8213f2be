//! Range tables and the resolver shared by every random table.

use tracing::{debug, error};

use crate::animal::{ANIMAL_CATEGORIES, CATEGORY_TABLES};
use crate::background::MUTANT_BACKGROUNDS;
use crate::error::{TableError, TableResult};

/// Lowest percentile roll.
pub const PERCENTILE_MIN: u32 = 1;

/// Highest percentile roll.
pub const PERCENTILE_MAX: u32 = 100;

/// One closed interval of a range table and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry {
    /// First roll covered.
    pub low: u32,
    /// Last roll covered.
    pub high: u32,
    /// The outcome for rolls in `low..=high`.
    pub label: &'static str,
}

impl RangeEntry {
    /// Create an entry covering `low..=high`.
    pub const fn new(low: u32, high: u32, label: &'static str) -> Self {
        Self { low, high, label }
    }

    /// True if `roll` falls inside this entry.
    pub const fn contains(&self, roll: u32) -> bool {
        self.low <= roll && roll <= self.high
    }
}

/// An ordered list of entries whose intervals partition 1-100.
///
/// The partition is a property of the authored data; [`validate`] checks it
/// and [`resolve`] assumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct RangeTable {
    /// Stable identifier used on the command line.
    pub slug: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// The entries in roll order.
    pub entries: &'static [RangeEntry],
}

impl RangeTable {
    /// Labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }
}

/// Find the label of the entry containing `roll`.
///
/// A miss means the table itself is malformed and is reported as
/// [`TableError::NoMatch`].
pub fn resolve(roll: u32, table: &RangeTable) -> TableResult<&'static str> {
    match table.entries.iter().find(|e| e.contains(roll)) {
        Some(entry) => {
            debug!(table = table.slug, roll, label = entry.label, "resolved table roll");
            Ok(entry.label)
        }
        None => {
            error!(table = table.slug, roll, "roll fell outside every table entry");
            Err(TableError::NoMatch {
                table: table.slug,
                roll,
            })
        }
    }
}

/// Check that every entry is well-formed and every roll 1-100 matches
/// exactly one entry.
pub fn validate(table: &RangeTable) -> TableResult<()> {
    for entry in table.entries {
        if entry.low > entry.high || entry.low < PERCENTILE_MIN || entry.high > PERCENTILE_MAX {
            return Err(TableError::BadEntry {
                table: table.slug,
                label: entry.label,
                low: entry.low,
                high: entry.high,
            });
        }
    }
    for roll in PERCENTILE_MIN..=PERCENTILE_MAX {
        let matches = table.entries.iter().filter(|e| e.contains(roll)).count();
        if matches != 1 {
            return Err(TableError::Partition {
                table: table.slug,
                roll,
                matches,
            });
        }
    }
    Ok(())
}

/// Every table in the generator: categories, each category's animals, and
/// backgrounds.
pub fn all_tables() -> Vec<&'static RangeTable> {
    let mut tables = vec![&ANIMAL_CATEGORIES];
    tables.extend(CATEGORY_TABLES.iter().map(|(_, t)| *t));
    tables.push(&MUTANT_BACKGROUNDS);
    tables
}

/// Look up a table by slug (case-insensitive).
pub fn lookup_table(slug: &str) -> TableResult<&'static RangeTable> {
    all_tables()
        .into_iter()
        .find(|t| t.slug.eq_ignore_ascii_case(slug.trim()))
        .ok_or_else(|| TableError::UnknownTable(slug.to_string()))
}
