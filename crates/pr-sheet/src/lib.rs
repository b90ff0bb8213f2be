//! Character sheet generation for Palladium Roller.
//!
//! Assembles attributes, animal type, mutant background, and finances into
//! one [`CharacterSheet`], and renders it as chat-style text or JSON.

pub mod config;
pub mod error;
pub mod generate;
pub mod prompt;
pub mod render;

pub use config::GeneratorConfig;
pub use error::{SheetError, SheetResult};
pub use generate::{CharacterSheet, Generator, RolledAttribute, generate_character};
pub use prompt::art_prompt;
pub use render::{
    RenderOptions, format_attribute_line, format_currency, render_sheet, render_sheet_with, to_json,
};
