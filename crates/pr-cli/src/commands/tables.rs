use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use pr_tables::{RangeTable, all_tables, lookup_table, resolve, validate};

pub fn run(name: Option<&str>, roll: Option<u32>, check: bool) -> Result<(), String> {
    if check {
        return check_all();
    }

    let Some(name) = name else {
        return list_tables(roll);
    };

    let table = lookup_table(name).map_err(|e| e.to_string())?;
    match roll {
        Some(roll) => {
            let label = resolve(roll, table).map_err(|e| e.to_string())?;
            println!("  {} d100 {roll} → {}", table.title.bold(), label);
        }
        None => print_table(table),
    }
    Ok(())
}

fn list_tables(roll: Option<u32>) -> Result<(), String> {
    if roll.is_some() {
        return Err("--roll needs a table name (see `palladium tables`)".into());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Title", "Entries"]);
    let tables = all_tables();
    for t in &tables {
        table.add_row(vec![
            t.slug.to_string(),
            t.title.to_string(),
            t.entries.len().to_string(),
        ]);
    }
    println!("{table}");
    println!();
    println!("  {} tables", tables.len());
    Ok(())
}

fn print_table(range_table: &RangeTable) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["d100", range_table.title]);
    for entry in range_table.entries {
        let range = if entry.low == entry.high {
            entry.low.to_string()
        } else {
            format!("{}-{}", entry.low, entry.high)
        };
        table.add_row(vec![range, entry.label.to_string()]);
    }
    println!("{table}");
}

fn check_all() -> Result<(), String> {
    let mut failures = 0;
    for table in all_tables() {
        match validate(table) {
            Ok(()) => println!("  {} {}", "ok".green(), table.slug),
            Err(e) => {
                failures += 1;
                println!("  {} {e}", "FAIL".red().bold());
            }
        }
    }
    if failures > 0 {
        Err(format!("{failures} malformed table(s)"))
    } else {
        println!("  All tables cover 1-100 exactly once.");
        Ok(())
    }
}
