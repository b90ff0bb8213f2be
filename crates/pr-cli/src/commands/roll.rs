use colored::Colorize;
use tracing::debug;

use pr_mechanics::StatMode;
use pr_sheet::{Generator, GeneratorConfig, RenderOptions, render_sheet_with, to_json};

use crate::Format;

pub struct RollArgs {
    pub name: Option<String>,
    pub mode: String,
    pub seed: Option<u64>,
    pub format: Format,
    pub dice: bool,
    pub art_prompt: bool,
}

pub fn run(args: RollArgs) -> Result<(), String> {
    let stat_mode = StatMode::parse(&args.mode).map_err(|e| e.to_string())?;

    let mut config = GeneratorConfig::default().with_mode(stat_mode);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(name) = args.name {
        config = config.with_name(name);
    }
    debug!(?config, "roll config");

    let sheet = Generator::new(config)
        .generate()
        .map_err(|e| format!("generation failed: {e}"))?;

    match args.format {
        Format::Json => {
            println!("{}", to_json(&sheet).map_err(|e| e.to_string())?);
        }
        Format::Text => {
            let options = RenderOptions {
                show_dice: args.dice,
                art_prompt: args.art_prompt,
            };
            println!("{}", render_sheet_with(&sheet, options));
            if sheet.any_capped() {
                eprintln!(
                    "  {}",
                    "note: scores above 30 use the 30 row of the bonus chart".yellow()
                );
            }
        }
    }

    Ok(())
}
