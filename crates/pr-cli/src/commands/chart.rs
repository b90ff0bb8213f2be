use comfy_table::{ContentArrangement, Table};

use pr_mechanics::bonus::{CHART_CEILING, CHART_FLOOR};
use pr_mechanics::{Attribute, Bonus};

pub fn run(attribute: Option<&str>) -> Result<(), String> {
    let attributes: Vec<Attribute> = match attribute {
        Some(name) => vec![Attribute::parse(name).map_err(|e| e.to_string())?],
        None => Attribute::ALL.to_vec(),
    };

    let columns: Vec<(Attribute, _)> = attributes
        .iter()
        .flat_map(|attr| attr.effects().iter().map(move |effect| (*attr, *effect)))
        .collect();

    if columns.is_empty() {
        let attr = attributes[0];
        println!("  {} ({attr}) has no chart bonuses.", attr.full_name());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Score".to_string()];
    header.extend(
        columns
            .iter()
            .map(|(attr, effect)| format!("{attr} {}", effect.label())),
    );
    table.set_header(header);

    for score in CHART_FLOOR..=CHART_CEILING {
        let mut row = vec![score.to_string()];
        row.extend(columns.iter().map(|(_, effect)| {
            Bonus {
                effect: *effect,
                value: effect.value(score),
            }
            .value_text()
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!(
        "  Scores below {CHART_FLOOR} have no bonus; scores above {CHART_CEILING} use the {CHART_CEILING} row."
    );

    Ok(())
}
