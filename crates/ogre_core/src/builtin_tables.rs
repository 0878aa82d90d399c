//! Built-in reference tables for Ogre Battle: The March of the Black Queen (SNES).
//!
//! Codes are the raw values stored in a slot. Item names keep the 10 character
//! truncation used by the in-game item list. These tables cover the codes seen
//! in real saves; anything else decodes to "unknown" unless a fuller table is
//! supplied with `ReferenceTables::load_from_dir`.

pub(crate) struct BuiltinEntry {
    pub code: u64,
    pub name: &'static str,
}

#[rustfmt::skip]
pub(crate) const CLASSES: &[BuiltinEntry] = &[
    // Human, male line
    BuiltinEntry { code: 0x01, name: "Fighter" },
    BuiltinEntry { code: 0x02, name: "Knight" },
    BuiltinEntry { code: 0x03, name: "Paladin" },
    BuiltinEntry { code: 0x04, name: "Samurai" },
    BuiltinEntry { code: 0x05, name: "Sam.Master" },
    BuiltinEntry { code: 0x06, name: "Berserker" },
    BuiltinEntry { code: 0x07, name: "Dragoon" },
    BuiltinEntry { code: 0x08, name: "Ninja" },
    BuiltinEntry { code: 0x09, name: "Ninja Mstr" },
    BuiltinEntry { code: 0x0a, name: "Beast Tamer" },
    BuiltinEntry { code: 0x0b, name: "Beast Mstr" },
    BuiltinEntry { code: 0x0c, name: "Dragon Tmr" },
    BuiltinEntry { code: 0x0d, name: "Dragon Mstr" },
    BuiltinEntry { code: 0x0e, name: "Wizard" },
    BuiltinEntry { code: 0x0f, name: "Mage" },
    BuiltinEntry { code: 0x10, name: "Sorcerer" },
    BuiltinEntry { code: 0x11, name: "Lich" },
    BuiltinEntry { code: 0x12, name: "Evil One" },
    BuiltinEntry { code: 0x13, name: "Doll Mstr" },
    BuiltinEntry { code: 0x14, name: "Enchanter" },
    BuiltinEntry { code: 0x15, name: "Monk" },

    // Human, female line
    BuiltinEntry { code: 0x20, name: "Amazon" },
    BuiltinEntry { code: 0x21, name: "Valkyrie" },
    BuiltinEntry { code: 0x22, name: "Freya" },
    BuiltinEntry { code: 0x23, name: "Muse" },
    BuiltinEntry { code: 0x24, name: "Cleric" },
    BuiltinEntry { code: 0x25, name: "Shaman" },
    BuiltinEntry { code: 0x26, name: "Witch" },
    BuiltinEntry { code: 0x27, name: "Princess" },
    BuiltinEntry { code: 0x28, name: "Siren" },

    // Demi-humans
    BuiltinEntry { code: 0x30, name: "Hawkman" },
    BuiltinEntry { code: 0x31, name: "Vultan" },
    BuiltinEntry { code: 0x32, name: "Raven" },
    BuiltinEntry { code: 0x33, name: "Angel" },
    BuiltinEntry { code: 0x34, name: "Cherubim" },
    BuiltinEntry { code: 0x35, name: "Seraphim" },
    BuiltinEntry { code: 0x36, name: "Faerie" },
    BuiltinEntry { code: 0x37, name: "Pixie" },
    BuiltinEntry { code: 0x38, name: "Sylph" },
    BuiltinEntry { code: 0x39, name: "Mermaid" },
    BuiltinEntry { code: 0x3a, name: "Nixie" },
    BuiltinEntry { code: 0x3b, name: "Werewolf" },
    BuiltinEntry { code: 0x3c, name: "Vampire" },
    BuiltinEntry { code: 0x3d, name: "Gorgon" },
    BuiltinEntry { code: 0x3e, name: "Goblin" },
    BuiltinEntry { code: 0x3f, name: "Hobgoblin" },

    // Monsters
    BuiltinEntry { code: 0x40, name: "Giant" },
    BuiltinEntry { code: 0x41, name: "Titan" },
    BuiltinEntry { code: 0x42, name: "Golem" },
    BuiltinEntry { code: 0x43, name: "Stone Golem" },
    BuiltinEntry { code: 0x44, name: "Iron Golem" },
    BuiltinEntry { code: 0x45, name: "Griffin" },
    BuiltinEntry { code: 0x46, name: "Cockatrice" },
    BuiltinEntry { code: 0x47, name: "Wyrm" },
    BuiltinEntry { code: 0x48, name: "Wyvern" },
    BuiltinEntry { code: 0x49, name: "Hellhound" },
    BuiltinEntry { code: 0x4a, name: "Cerberus" },
    BuiltinEntry { code: 0x4b, name: "Octopus" },
    BuiltinEntry { code: 0x4c, name: "Kraken" },
    BuiltinEntry { code: 0x4d, name: "Ghost" },
    BuiltinEntry { code: 0x4e, name: "Phantom" },
    BuiltinEntry { code: 0x4f, name: "Skeleton" },
    BuiltinEntry { code: 0x50, name: "Wraith" },
    BuiltinEntry { code: 0x51, name: "Pumpkinhead" },
    BuiltinEntry { code: 0x52, name: "Halloween" },

    // Dragons
    BuiltinEntry { code: 0x60, name: "Red Dragon" },
    BuiltinEntry { code: 0x61, name: "Salamander" },
    BuiltinEntry { code: 0x62, name: "Silver Drgn" },
    BuiltinEntry { code: 0x63, name: "Ice Dragon" },
    BuiltinEntry { code: 0x64, name: "Platinum Dr" },
    BuiltinEntry { code: 0x65, name: "Black Drgn" },
    BuiltinEntry { code: 0x66, name: "Tiamat" },
    BuiltinEntry { code: 0x67, name: "Gold Dragon" },
    BuiltinEntry { code: 0x68, name: "Quetzalcoatl" },

    // Opinion leader
    BuiltinEntry { code: 0x7f, name: "Lord" },
];

#[rustfmt::skip]
pub(crate) const ITEMS: &[BuiltinEntry] = &[
    BuiltinEntry { code: 0x01, name: "Sonic Blad" },
    BuiltinEntry { code: 0x02, name: "Sword Gram" },
    BuiltinEntry { code: 0x03, name: "Dragon Sla" },
    BuiltinEntry { code: 0x04, name: "Holy Lance" },
    BuiltinEntry { code: 0x05, name: "Rune Axe" },
    BuiltinEntry { code: 0x06, name: "Ogre Blade" },
    BuiltinEntry { code: 0x07, name: "Eviltwin" },
    BuiltinEntry { code: 0x08, name: "Muramasa" },
    BuiltinEntry { code: 0x09, name: "Kotetsu" },
    BuiltinEntry { code: 0x0a, name: "Brunhild" },
    BuiltinEntry { code: 0x0b, name: "Bizen" },
    BuiltinEntry { code: 0x0c, name: "Ianuki" },
    BuiltinEntry { code: 0x0d, name: "Mystic Arm" },
    BuiltinEntry { code: 0x0e, name: "Shield Lgt" },
    BuiltinEntry { code: 0x0f, name: "Dragon Sld" },
    BuiltinEntry { code: 0x10, name: "Hector Arm" },
    BuiltinEntry { code: 0x11, name: "Ring Angel" },
    BuiltinEntry { code: 0x12, name: "Ring Star" },
    BuiltinEntry { code: 0x13, name: "Ring Moon" },
    BuiltinEntry { code: 0x14, name: "Ring Sun" },
    BuiltinEntry { code: 0x15, name: "Bell Ruin" },
    BuiltinEntry { code: 0x16, name: "Grail" },
    BuiltinEntry { code: 0x17, name: "Book Magic" },
    BuiltinEntry { code: 0x18, name: "Mirror" },
    BuiltinEntry { code: 0x19, name: "Champion" },
    BuiltinEntry { code: 0x1a, name: "Quickring" },
    BuiltinEntry { code: 0x1b, name: "Torn Robe" },
    BuiltinEntry { code: 0x1c, name: "Silver Hrp" },
    BuiltinEntry { code: 0x1d, name: "Blue Jewel" },
    BuiltinEntry { code: 0x1e, name: "Red Jewel" },
];

#[rustfmt::skip]
pub(crate) const NAMES: &[BuiltinEntry] = &[
    BuiltinEntry { code: 0x8d30, name: "CANOPUS" },
    BuiltinEntry { code: 0x8d31, name: "WARREN" },
    BuiltinEntry { code: 0x8d32, name: "ASHE" },
    BuiltinEntry { code: 0x8d33, name: "GILBERT" },
    BuiltinEntry { code: 0x8d34, name: "LANDO" },
    BuiltinEntry { code: 0x8d35, name: "DEBONAIR" },
    BuiltinEntry { code: 0x8d36, name: "TRISTAN" },
    BuiltinEntry { code: 0x8d37, name: "AISHA" },
    BuiltinEntry { code: 0x8d38, name: "NORN" },
    BuiltinEntry { code: 0x8d39, name: "SLUST" },
    BuiltinEntry { code: 0x8d3a, name: "LAUNCELOT" },
    BuiltinEntry { code: 0x8d3b, name: "RAUNE" },
    BuiltinEntry { code: 0x8d3c, name: "ARNOLD" },
    BuiltinEntry { code: 0x8d3d, name: "BASTIAN" },
    BuiltinEntry { code: 0x8d3e, name: "CECIL" },
    BuiltinEntry { code: 0x8d3f, name: "DANIEL" },
    BuiltinEntry { code: 0x8d40, name: "EDGAR" },
    BuiltinEntry { code: 0x8d41, name: "FRANK" },
    BuiltinEntry { code: 0x8d42, name: "GUSTAV" },
    BuiltinEntry { code: 0x8d43, name: "HANS" },
    BuiltinEntry { code: 0x8d44, name: "IVAN" },
    BuiltinEntry { code: 0x8d45, name: "JULIA" },
    BuiltinEntry { code: 0x8d46, name: "KARL" },
    BuiltinEntry { code: 0x8d47, name: "LEON" },
    BuiltinEntry { code: 0x8d48, name: "MARTHA" },
    BuiltinEntry { code: 0x8d49, name: "NINA" },
    BuiltinEntry { code: 0x8d4a, name: "OSCAR" },
    BuiltinEntry { code: 0x8d4b, name: "PAULA" },
];
