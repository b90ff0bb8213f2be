//! Percentile range tables for Palladium Roller.
//!
//! A range table turns a d100 roll into a label. The animal generator uses
//! two in sequence (category, then animal within the category); the mutant
//! background generator uses one. The background then selects a finance
//! rule for starting money and vehicle budget.

pub mod animal;
pub mod background;
pub mod error;
pub mod finance;
pub mod table;

pub use animal::{AnimalResult, animal_from_rolls, generate_animal};
pub use background::{BackgroundResult, background_from_roll, generate_background};
pub use error::{TableError, TableResult};
pub use finance::{FinanceProfile, FinanceResult, FinanceRule, resolve_finances};
pub use table::{RangeEntry, RangeTable, all_tables, lookup_table, resolve, validate};
