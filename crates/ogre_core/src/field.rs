use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{self, Codec};
use crate::core_api::{CoreError, CoreErrorCode};
use crate::layout::SLOT_SIZE;

/// Number of unit records in a slot.
pub const UNIT_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Repeated once per unit record.
    Unit,
    /// Singleton fields.
    Misc,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unit => f.write_str("unit"),
            Self::Misc => f.write_str("misc"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub category: Category,
    pub name: &'static str,
    /// Offset of stride 0, relative to the slot start.
    pub offset: usize,
    pub width: usize,
    pub count: usize,
    pub codec: &'static dyn Codec,
}

impl FieldDescriptor {
    /// Slot-relative address of the given repetition.
    pub fn address(&self, stride: usize) -> Result<usize, CoreError> {
        if stride >= self.count {
            return Err(CoreError::new(
                CoreErrorCode::StrideOutOfRange,
                format!(
                    "index {stride} is out of range for {} field '{}': max items are {}",
                    self.category, self.name, self.count
                ),
            ));
        }
        Ok(self.offset + stride * self.width)
    }

    /// One past the last byte of the final repetition.
    pub fn end(&self) -> usize {
        self.offset + self.count * self.width
    }
}

const fn unit(
    name: &'static str,
    offset: usize,
    width: usize,
    codec: &'static dyn Codec,
) -> FieldDescriptor {
    FieldDescriptor {
        category: Category::Unit,
        name,
        offset,
        width,
        count: UNIT_COUNT,
        codec,
    }
}

const fn misc(
    name: &'static str,
    offset: usize,
    width: usize,
    codec: &'static dyn Codec,
) -> FieldDescriptor {
    FieldDescriptor {
        category: Category::Misc,
        name,
        offset,
        width,
        count: 1,
        codec,
    }
}

pub const CHECKSUM_FIELD: &str = "CHECKSUM";
pub const LEADER_NAME_FIELD: &str = "LEADER_NAME";

#[rustfmt::skip]
pub static FIELDS: &[FieldDescriptor] = &[
    unit("CLASS", 0x0069, 1, &codec::CLASS),
    unit("LVL",   0x0131, 1, &codec::INTEGER),
    unit("EXP",   0x0195, 1, &codec::INTEGER),
    unit("HP",    0x01f9, 2, &codec::INTEGER),
    unit("STR",   0x02c1, 1, &codec::INTEGER),
    unit("AGI",   0x0325, 1, &codec::INTEGER),
    unit("INT",   0x0389, 1, &codec::INTEGER),
    unit("CHA",   0x03ed, 1, &codec::INTEGER),
    unit("ALI",   0x0451, 1, &codec::INTEGER),
    unit("LUK",   0x04b5, 1, &codec::INTEGER),
    unit("COST",  0x0519, 2, &codec::INTEGER),
    unit("ITEM",  0x05e1, 1, &codec::ITEM),
    unit("NAME",  0x0645, 2, &codec::NAME),

    misc(CHECKSUM_FIELD,    0x0aa8, 2, &codec::INTEGER),
    misc(LEADER_NAME_FIELD, 0x0910, 8, &codec::ASCII),
    misc("MONEY",           0x092b, 3, &codec::INTEGER),
    misc("REPUTATION",      0x092f, 1, &codec::INTEGER),
];

/// Order in which unit fields are listed to users.
pub const UNIT_DISPLAY_ORDER: [&str; 13] = [
    "NAME", "CLASS", "LVL", "EXP", "HP", "STR", "AGI", "INT", "CHA", "ALI", "LUK", "COST", "ITEM",
];

pub const MISC_DISPLAY_ORDER: [&str; 4] = [LEADER_NAME_FIELD, "MONEY", "REPUTATION", CHECKSUM_FIELD];

pub fn fields(category: Category) -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(move |f| f.category == category)
}

pub fn lookup(category: Category, name: &str) -> Result<&'static FieldDescriptor, CoreError> {
    let mut matches = fields(category).filter(|f| f.name == name);
    let Some(found) = matches.next() else {
        return Err(CoreError::new(
            CoreErrorCode::FieldNotFound,
            format!("cannot find {category} field '{name}'"),
        ));
    };
    if matches.next().is_some() {
        return Err(CoreError::new(
            CoreErrorCode::AmbiguousField,
            format!("{category} field '{name}' is defined more than once"),
        ));
    }
    Ok(found)
}

/// Checks that every repetition of every field lies inside a slot and that
/// names are unique per category.
pub fn validate_table(table: &[FieldDescriptor]) -> Result<(), CoreError> {
    for (index, field) in table.iter().enumerate() {
        if field.width == 0 || field.count == 0 {
            return Err(CoreError::new(
                CoreErrorCode::Parse,
                format!("field '{}' has zero width or count", field.name),
            ));
        }
        if field.end() > SLOT_SIZE {
            return Err(CoreError::new(
                CoreErrorCode::Parse,
                format!(
                    "field '{}' ends at {:#06x}, past slot size {:#06x}",
                    field.name,
                    field.end(),
                    SLOT_SIZE
                ),
            ));
        }
        if table[..index]
            .iter()
            .any(|f| f.category == field.category && f.name == field.name)
        {
            return Err(CoreError::new(
                CoreErrorCode::AmbiguousField,
                format!("{} field '{}' is defined more than once", field.category, field.name),
            ));
        }
    }
    Ok(())
}
