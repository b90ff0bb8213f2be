use colored::Colorize;

use pr_sheet::format_currency;
use pr_tables::finance::finance_profile;
use pr_tables::resolve_finances;

pub fn run(background: &str, seed: Option<u64>) -> Result<(), String> {
    let profile = finance_profile(background).map_err(|e| e.to_string())?;
    let mut source = super::source_for(seed);
    let result = resolve_finances(profile.background, &mut source);

    println!("  {} {}", "Background:".bold(), profile.background);
    println!("  {} {}", "Rule:".bold(), profile.money);
    if let (Some(money), Some(trace)) = (result.money, result.trace.as_deref()) {
        println!("  {} {} ({trace})", "Money:".bold(), format_currency(money));
    }
    match result.vehicle_expense {
        Some(amount) => println!(
            "  {} {}",
            "Vehicle budget:".bold(),
            format_currency(i64::from(amount))
        ),
        None => println!("  {} none", "Vehicle budget:".bold()),
    }
    if let Some(note) = &result.note {
        println!("  {}", note.italic());
    }
    Ok(())
}
