//! Animal type: a d100 for the category, then a d100 on that category's
//! animal table. Both rolls are kept on the result.

use pr_mechanics::RandomSource;
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::table::{RangeEntry, RangeTable, resolve};

/// Top-level animal category (7 entries).
pub static ANIMAL_CATEGORIES: RangeTable = RangeTable {
    slug: "categories",
    title: "Animal Categories",
    entries: &[
        RangeEntry::new(1, 15, "Urban"),
        RangeEntry::new(16, 25, "Rural"),
        RangeEntry::new(26, 45, "Forest"),
        RangeEntry::new(46, 70, "Desert/Plains"),
        RangeEntry::new(71, 75, "Aquatic"),
        RangeEntry::new(76, 95, "Wild Birds"),
        RangeEntry::new(96, 100, "Zoo"),
    ],
};

/// Urban Animals (15 entries).
pub static URBAN: RangeTable = RangeTable {
    slug: "urban",
    title: "Urban Animals",
    entries: &[
        RangeEntry::new(1, 25, "Dog"),
        RangeEntry::new(26, 45, "Cat"),
        RangeEntry::new(46, 50, "Mouse"),
        RangeEntry::new(51, 55, "Rat"),
        RangeEntry::new(56, 58, "Hamster"),
        RangeEntry::new(59, 60, "Guinea Pig"),
        RangeEntry::new(61, 65, "Squirrel"),
        RangeEntry::new(66, 75, "Sparrow"),
        RangeEntry::new(76, 83, "Pigeon"),
        RangeEntry::new(84, 85, "Parrot"),
        RangeEntry::new(86, 88, "Bat"),
        RangeEntry::new(89, 92, "Turtle"),
        RangeEntry::new(93, 95, "Frog"),
        RangeEntry::new(96, 97, "Lizard"),
        RangeEntry::new(98, 100, "Chameleon"),
    ],
};

/// Rural Animals (15 entries).
pub static RURAL: RangeTable = RangeTable {
    slug: "rural",
    title: "Rural Animals",
    entries: &[
        RangeEntry::new(1, 10, "Dog"),
        RangeEntry::new(11, 15, "Cat"),
        RangeEntry::new(16, 20, "Cow"),
        RangeEntry::new(21, 35, "Pig"),
        RangeEntry::new(36, 45, "Chicken"),
        RangeEntry::new(46, 50, "Duck"),
        RangeEntry::new(51, 58, "Horse"),
        RangeEntry::new(59, 62, "Donkey"),
        RangeEntry::new(63, 65, "Rabbit"),
        RangeEntry::new(66, 75, "Mouse"),
        RangeEntry::new(76, 80, "Jumping Mouse"),
        RangeEntry::new(81, 85, "Sheep"),
        RangeEntry::new(86, 90, "Goat"),
        RangeEntry::new(91, 94, "Turkey"),
        RangeEntry::new(95, 100, "Bat"),
    ],
};

/// Forest Animals (21 entries).
pub static FOREST: RangeTable = RangeTable {
    slug: "forest",
    title: "Forest Animals",
    entries: &[
        RangeEntry::new(1, 3, "Wolf"),
        RangeEntry::new(4, 6, "Fox"),
        RangeEntry::new(7, 13, "Coyote"),
        RangeEntry::new(14, 16, "Badger"),
        RangeEntry::new(17, 20, "Black Bear"),
        RangeEntry::new(21, 24, "Grizzly Bear"),
        RangeEntry::new(25, 30, "Mountain Lion"),
        RangeEntry::new(31, 32, "Bobcat"),
        RangeEntry::new(33, 34, "Lynx"),
        RangeEntry::new(35, 36, "Wolverine"),
        RangeEntry::new(37, 40, "Weasel"),
        RangeEntry::new(41, 45, "Raccoon"),
        RangeEntry::new(46, 54, "Ringtail"),
        RangeEntry::new(55, 60, "Opossum"),
        RangeEntry::new(61, 65, "Skunk"),
        RangeEntry::new(66, 70, "Porcupine"),
        RangeEntry::new(71, 76, "Mole"),
        RangeEntry::new(77, 78, "Squirrel"),
        RangeEntry::new(79, 84, "Marten"),
        RangeEntry::new(85, 94, "Deer"),
        RangeEntry::new(95, 100, "Elk"),
    ],
};

/// Desert and Plains Animals (13 entries).
pub static DESERT_PLAINS: RangeTable = RangeTable {
    slug: "desert-plains",
    title: "Desert and Plains Animals",
    entries: &[
        RangeEntry::new(1, 15, "Coyote"),
        RangeEntry::new(16, 20, "Mountain Lion"),
        RangeEntry::new(21, 30, "Armadillo"),
        RangeEntry::new(31, 35, "Peccary (treat as a Boar)"),
        RangeEntry::new(36, 40, "Coati"),
        RangeEntry::new(41, 45, "Gila Monster"),
        RangeEntry::new(46, 55, "Lizard"),
        RangeEntry::new(56, 65, "Pack Rat"),
        RangeEntry::new(66, 75, "Prairie Dog"),
        RangeEntry::new(76, 80, "Pronghorn"),
        RangeEntry::new(81, 90, "Road Runner"),
        RangeEntry::new(91, 95, "Kangaroo Rat"),
        RangeEntry::new(96, 100, "Jumping Mouse"),
    ],
};

/// Aquatic Animals (10 entries).
pub static AQUATIC: RangeTable = RangeTable {
    slug: "aquatic",
    title: "Aquatic Animals",
    entries: &[
        RangeEntry::new(1, 20, "Otter"),
        RangeEntry::new(21, 30, "Beaver"),
        RangeEntry::new(31, 50, "Muskrat"),
        RangeEntry::new(51, 55, "Dolphin"),
        RangeEntry::new(56, 60, "Whale"),
        RangeEntry::new(61, 65, "Octopus"),
        RangeEntry::new(66, 70, "Sea Turtle"),
        RangeEntry::new(71, 80, "Sea Lion"),
        RangeEntry::new(81, 90, "Seal"),
        RangeEntry::new(91, 100, "Walrus"),
    ],
};

/// Wild Birds (19 entries).
pub static WILD_BIRDS: RangeTable = RangeTable {
    slug: "wild-birds",
    title: "Wild Birds",
    entries: &[
        RangeEntry::new(1, 10, "Sparrow"),
        RangeEntry::new(11, 15, "Robin"),
        RangeEntry::new(16, 18, "Blue Jay"),
        RangeEntry::new(19, 21, "Cardinal"),
        RangeEntry::new(22, 23, "Wild Turkey"),
        RangeEntry::new(24, 25, "Pheasant"),
        RangeEntry::new(26, 27, "Grouse"),
        RangeEntry::new(28, 29, "Quail"),
        RangeEntry::new(30, 34, "Crow"),
        RangeEntry::new(35, 39, "Duck"),
        RangeEntry::new(40, 45, "Owl"),
        RangeEntry::new(46, 50, "Condor"),
        RangeEntry::new(51, 55, "Buzzard"),
        RangeEntry::new(56, 65, "Vulture"),
        RangeEntry::new(66, 70, "Hawk"),
        RangeEntry::new(71, 75, "Falcon"),
        RangeEntry::new(76, 85, "Goose"),
        RangeEntry::new(86, 90, "Eagle"),
        RangeEntry::new(91, 100, "Hummingbird"),
    ],
};

/// Zoo Animals (17 entries).
pub static ZOO: RangeTable = RangeTable {
    slug: "zoo",
    title: "Zoo Animals",
    entries: &[
        RangeEntry::new(1, 10, "Lion"),
        RangeEntry::new(11, 15, "Tiger"),
        RangeEntry::new(16, 20, "Leopard"),
        RangeEntry::new(21, 25, "Cheetah"),
        RangeEntry::new(26, 30, "Polar Bear"),
        RangeEntry::new(31, 35, "Crocodile (or Alligator)"),
        RangeEntry::new(36, 40, "Aardvark"),
        RangeEntry::new(41, 45, "Rhinoceros"),
        RangeEntry::new(46, 50, "Hippopotamus"),
        RangeEntry::new(51, 60, "Elephant"),
        RangeEntry::new(61, 65, "Chimpanzee"),
        RangeEntry::new(66, 70, "Orangutan"),
        RangeEntry::new(71, 75, "Gorilla"),
        RangeEntry::new(76, 85, "Monkey"),
        RangeEntry::new(86, 90, "Baboon"),
        RangeEntry::new(91, 95, "Camel"),
        RangeEntry::new(96, 100, "Buffalo"),
    ],
};

/// Category label to its animal table, in category order.
pub static CATEGORY_TABLES: [(&str, &RangeTable); 7] = [
    ("Urban", &URBAN),
    ("Rural", &RURAL),
    ("Forest", &FOREST),
    ("Desert/Plains", &DESERT_PLAINS),
    ("Aquatic", &AQUATIC),
    ("Wild Birds", &WILD_BIRDS),
    ("Zoo", &ZOO),
];

/// The animal table for a category label.
pub fn animal_table(category: &str) -> TableResult<&'static RangeTable> {
    CATEGORY_TABLES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, table)| *table)
        .ok_or_else(|| TableError::UnknownCategory(category.to_string()))
}

/// A generated animal type with the rolls that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalResult {
    /// The d100 rolled on the category table.
    pub category_roll: u32,
    /// The resolved category.
    pub category: String,
    /// The d100 rolled on the category's animal table.
    pub animal_roll: u32,
    /// The resolved animal.
    pub animal: String,
}

/// Resolve an animal from its two percentile rolls.
pub fn animal_from_rolls(category_roll: u32, animal_roll: u32) -> TableResult<AnimalResult> {
    let category = resolve(category_roll, &ANIMAL_CATEGORIES)?;
    let animal = resolve(animal_roll, animal_table(category)?)?;
    Ok(AnimalResult {
        category_roll,
        category: category.to_string(),
        animal_roll,
        animal: animal.to_string(),
    })
}

/// Roll a random animal type.
pub fn generate_animal(source: &mut impl RandomSource) -> TableResult<AnimalResult> {
    let category_roll = source.roll_percentile();
    let animal_roll = source.roll_percentile();
    animal_from_rolls(category_roll, animal_roll)
}
