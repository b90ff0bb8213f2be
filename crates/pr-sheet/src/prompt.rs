//! Descriptive art prompt built from the animal and background.

use pr_tables::{AnimalResult, BackgroundResult};

fn setting(category: &str) -> &'static str {
    match category {
        "Urban" => "on a rain-slick street of a ruined city",
        "Rural" => "beside a sagging barn on an overgrown farm road",
        "Forest" => "at the edge of a dark pine forest",
        "Desert/Plains" => "on a sun-bleached desert highway",
        "Aquatic" => "on a rusted pier above a flooded town",
        "Wild Birds" => "perched on a collapsed highway overpass",
        "Zoo" => "among the broken cages of an abandoned zoo",
        _ => "on an empty post-apocalyptic highway",
    }
}

fn look(background: &str) -> &'static str {
    match background {
        "Mechanic" => "in grease-stained coveralls with a torque wrench",
        "Biker" => "in a studded leather jacket astride a battered motorcycle",
        "Trooper" => "in a Road Patrol uniform and mirrored visor",
        "Feral Mutant Animal" => "in scavenged rags with a crude spear",
        "Ninja" => "in dark wraps with a katana across the back",
        "Trucker" => "in a denim vest beside an armored semi rig",
        "Highway Engineer" => "in a hard hat and surveyor's harness",
        "Natural Mechanical Genius" => "surrounded by half-built machines and loose gears",
        _ => "in road-worn traveling gear",
    }
}

/// The animal's common name, lowercased, without table annotations such as
/// "(treat as a Boar)".
fn animal_noun(animal: &str) -> String {
    animal
        .split(" (")
        .next()
        .unwrap_or(animal)
        .trim()
        .to_lowercase()
}

/// A text-to-image prompt describing the character.
pub fn art_prompt(animal: &AnimalResult, background: &BackgroundResult) -> String {
    format!(
        "Comic-book illustration of an anthropomorphic mutant {}, {}, {}. \
         Gritty post-apocalyptic road warrior style, bold inks, muted colors.",
        animal_noun(&animal.animal),
        look(&background.background),
        setting(&animal.category),
    )
}
