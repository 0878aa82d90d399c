//! Additive 16-bit checksum stored at the end of every slot.

use crate::codec;
use crate::core_api::{CoreError, ReadResult};
use crate::field::{self, CHECKSUM_FIELD, Category};
use crate::layout::ByteRange;
use crate::reference::References;
use crate::slot::Slot;

/// Summed bytes, relative to the slot start. Skips the 3 byte slot header
/// and stops right before the checksum field.
pub const CHECKSUM_RANGE: ByteRange = ByteRange::new(0x0003, 0x0aa8);

pub const COMPUTED_CHECKSUM_NAME: &str = "COMPUTED_CHECKSUM";

pub fn checksum_of(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |acc, &b| acc.wrapping_add(u16::from(b)))
}

pub fn compute(slot: &Slot) -> Result<u16, CoreError> {
    Ok(checksum_of(slot.range(CHECKSUM_RANGE)?))
}

/// The checksum as currently stored in the slot.
pub fn stored(slot: &Slot, refs: &References<'_>) -> Result<ReadResult, CoreError> {
    slot.get(Category::Misc, CHECKSUM_FIELD, 0, refs)
}

/// The freshly computed checksum, shaped like a field read.
pub fn computed_result(slot: &Slot) -> Result<ReadResult, CoreError> {
    let value = compute(slot)?;
    Ok(ReadResult {
        name: COMPUTED_CHECKSUM_NAME.to_string(),
        value: u64::from(value),
        formatted: value.to_string(),
        raw: codec::int_to_bytes(u64::from(value)),
        address: 0,
    })
}

pub fn update(slot: &mut Slot, refs: &References<'_>) -> Result<u16, CoreError> {
    let value = compute(slot)?;
    let descriptor = field::lookup(Category::Misc, CHECKSUM_FIELD)?;
    slot.write_field(descriptor, 0, &value.to_string(), refs)?;
    Ok(value)
}
