//! Chat-style text and JSON output for character sheets.
//!
//! The text layout uses `**bold**` and `*italic*` markers so it can be
//! pasted straight into a chat message.

use pr_mechanics::bonus::is_capped;
use pr_mechanics::{Attribute, AttributeRoll};
use pr_tables::FinanceResult;

use crate::error::SheetResult;
use crate::generate::CharacterSheet;
use crate::prompt::art_prompt;

/// Extra sections for [`render_sheet_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the raw dice to each attribute line.
    pub show_dice: bool,
    /// Append a descriptive art prompt.
    pub art_prompt: bool,
}

/// One attribute line, e.g. `PS: 22 (Damage +7)`.
///
/// Scores above 30 get a `(bonuses capped @30)` suffix.
pub fn format_attribute_line(attribute: Attribute, score: u32) -> String {
    let bonuses: Vec<String> = attribute
        .bonuses(score)
        .iter()
        .map(ToString::to_string)
        .collect();
    let capped = if is_capped(score) {
        " (bonuses capped @30)"
    } else {
        ""
    };
    if bonuses.is_empty() {
        format!("{attribute}: {score}{capped}")
    } else {
        format!("{attribute}: {score} ({}){capped}", bonuses.join(", "))
    }
}

fn format_dice(roll: &AttributeRoll) -> String {
    let mut parts: Vec<String> = roll.base_dice.iter().map(u32::to_string).collect();
    if let Some(dropped) = roll.dropped {
        parts.push(format!("dropped {dropped}"));
    }
    let mut out = parts.join(", ");
    if !roll.bonus_dice.is_empty() {
        let bonus: Vec<String> = roll.bonus_dice.iter().map(u32::to_string).collect();
        out.push_str("; bonus ");
        out.push_str(&bonus.join(", "));
    }
    format!("[{out}]")
}

/// Format an amount as dollars with thousands separators, e.g. `$12,500`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn finance_lines(finances: &FinanceResult) -> Vec<String> {
    let mut lines = Vec::new();
    match (finances.money, finances.trace.as_deref()) {
        (Some(money), Some(trace)) => {
            lines.push(format!("**Finances**: {} ({trace})", format_currency(money)));
        }
        (Some(money), None) => lines.push(format!("**Finances**: {}", format_currency(money))),
        (None, _) => lines.push("**Finances**: unknown".to_string()),
    }
    match finances.vehicle_expense {
        Some(amount) => lines.push(format!(
            "Vehicle budget: {}",
            format_currency(i64::from(amount))
        )),
        None => lines.push("Vehicle budget: none".to_string()),
    }
    if let Some(note) = &finances.note {
        lines.push(format!("*{note}*"));
    }
    lines
}

/// Render a sheet as chat text.
pub fn render_sheet(sheet: &CharacterSheet) -> String {
    render_sheet_with(sheet, RenderOptions::default())
}

/// Render a sheet as chat text with optional extra sections.
pub fn render_sheet_with(sheet: &CharacterSheet, options: RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(name) = &sheet.name {
        lines.push(format!("**{name}**"));
    }

    lines.push(format!("**Attributes** ({})", sheet.stat_mode));
    for rolled in &sheet.attributes {
        let mut line = format_attribute_line(rolled.attribute, rolled.score);
        if options.show_dice {
            line.push(' ');
            line.push_str(&format_dice(&rolled.roll));
        }
        lines.push(line);
    }

    let animal = &sheet.animal;
    lines.push(String::new());
    lines.push(format!(
        "**Animal Type**: {} (Category: {}; rolls {}/{})",
        animal.animal, animal.category, animal.category_roll, animal.animal_roll
    ));

    let background = &sheet.background;
    lines.push(String::new());
    lines.push(format!(
        "**Mutant Background**: {} (roll {})",
        background.background, background.roll
    ));
    if !background.summary.is_empty() {
        lines.push(format!("*{}*", background.summary));
    }

    lines.push(String::new());
    lines.extend(finance_lines(&sheet.finances));

    if options.art_prompt {
        lines.push(String::new());
        lines.push(format!(
            "**Art Prompt**: {}",
            art_prompt(&sheet.animal, &sheet.background)
        ));
    }

    lines.join("\n")
}

/// Serialize a sheet as pretty-printed JSON.
pub fn to_json(sheet: &CharacterSheet) -> SheetResult<String> {
    Ok(serde_json::to_string_pretty(sheet)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_character;
    use pr_mechanics::{ScriptedDice, StatMode};

    fn golden_sheet() -> CharacterSheet {
        let mut dice = ScriptedDice::new([
            3, 4, 5, 6, 6, 5, 6, 2, 1, 2, 3, 6, 6, 6, 4, 2, 2, 2, 5, 5, 6, 6, 6, 4, 4, 4, 6, 5,
            4, 10, 30, 40, 4,
        ]);
        generate_character(StatMode::ThreeD6, &mut dice).unwrap()
    }

    #[test]
    fn attribute_lines() {
        assert_eq!(format_attribute_line(Attribute::IQ, 12), "IQ: 12");
        assert_eq!(format_attribute_line(Attribute::IQ, 18), "IQ: 18 (Skills +4%)");
        assert_eq!(
            format_attribute_line(Attribute::ME, 21),
            "ME: 21 (Save vs Psionic +3, Save vs Insanity +4)"
        );
        assert_eq!(format_attribute_line(Attribute::SPD, 33), "SPD: 33 (bonuses capped @30)");
        assert_eq!(
            format_attribute_line(Attribute::PS, 31),
            "PS: 31 (Damage +15) (bonuses capped @30)"
        );
    }

    #[test]
    fn currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1200), "$1,200");
        assert_eq!(format_currency(25_000), "$25,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
        assert_eq!(format_currency(-4500), "-$4,500");
    }

    #[test]
    fn golden_text() {
        let mut sheet = golden_sheet();
        sheet.name = Some("Rusty".to_string());
        let expected = "\
**Rusty**
**Attributes** (3d6)
IQ: 12
ME: 25 (Save vs Psionic +5, Save vs Insanity +8)
MA: 6
PS: 22 (Damage +7)
PP: 6
PE: 28 (Save vs Coma/Death +26%, Save vs Magic/Poison +7)
PB: 12
SPD: 15

**Animal Type**: Cat (Category: Urban; rolls 10/30)

**Mutant Background**: Trooper (roll 40)
*Road Patrol tradition; military-style training; law & order focus.*

**Finances**: $1,200 (1d6 (4) × 300 = 1200)
Vehicle budget: $10,000";
        assert_eq!(render_sheet(&sheet), expected);
    }

    #[test]
    fn dice_detail() {
        let sheet = golden_sheet();
        let text = render_sheet_with(
            &sheet,
            RenderOptions {
                show_dice: true,
                art_prompt: false,
            },
        );
        assert!(
            text.contains("ME: 25 (Save vs Psionic +5, Save vs Insanity +8) [6, 6, 5; bonus 6, 2]")
        );
        assert!(text.contains("IQ: 12 [3, 4, 5]"));
    }

    #[test]
    fn dropped_die_is_shown() {
        let roll = AttributeRoll {
            base_dice: vec![6, 5, 4],
            dropped: Some(2),
            bonus_dice: vec![],
        };
        assert_eq!(format_dice(&roll), "[6, 5, 4, dropped 2]");
    }

    #[test]
    fn unknown_finances_render() {
        let finances = FinanceResult {
            note: Some("no finance rule configured for background 'X'".to_string()),
            ..FinanceResult::default()
        };
        assert_eq!(
            finance_lines(&finances),
            vec![
                "**Finances**: unknown".to_string(),
                "Vehicle budget: none".to_string(),
                "*no finance rule configured for background 'X'*".to_string(),
            ]
        );
    }

    #[test]
    fn art_prompt_section() {
        let sheet = golden_sheet();
        let text = render_sheet_with(
            &sheet,
            RenderOptions {
                show_dice: false,
                art_prompt: true,
            },
        );
        assert!(text.contains("**Art Prompt**: "));
        assert!(text.contains("cat"));
    }

    #[test]
    fn json_round_trip() {
        let sheet = golden_sheet();
        let json = to_json(&sheet).unwrap();
        assert!(json.contains("\"background\": \"Trooper\""));
        let back: CharacterSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }
}
