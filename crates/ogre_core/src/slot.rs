use log::debug;

use crate::codec;
use crate::core_api::{CoreError, CoreErrorCode, ReadResult};
use crate::field::{self, Category, FieldDescriptor};
use crate::layout::{self, ByteRange, SLOT_SIZE, START_ADDRESS};
use crate::reference::References;

/// In-memory copy of one save slot. Always exactly `SLOT_SIZE` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    index: usize,
    bytes: Vec<u8>,
}

impl Slot {
    pub fn from_bytes(index: usize, bytes: Vec<u8>) -> Result<Self, CoreError> {
        layout::check_slot_index(index)?;
        if bytes.len() != SLOT_SIZE {
            return Err(CoreError::new(
                CoreErrorCode::FileSizeMismatch,
                format!(
                    "slot {index} holds {} bytes, expected {SLOT_SIZE}",
                    bytes.len()
                ),
            ));
        }
        Ok(Self { index, bytes })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Absolute file offset of a slot-relative address.
    pub fn file_address(&self, address: usize) -> usize {
        START_ADDRESS + self.index * SLOT_SIZE + address
    }

    pub fn range(&self, range: ByteRange) -> Result<&[u8], CoreError> {
        self.check_range(range)?;
        Ok(&self.bytes[range.start..range.end])
    }

    pub fn write_range(&mut self, start: usize, data: &[u8]) -> Result<(), CoreError> {
        self.check_range(ByteRange::new(start, start + data.len()))?;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn check_range(&self, range: ByteRange) -> Result<(), CoreError> {
        if range.start > range.end || range.end > self.bytes.len() {
            return Err(CoreError::new(
                CoreErrorCode::StrideOutOfRange,
                format!(
                    "range {:#06x}..{:#06x} is outside the {SLOT_SIZE:#06x} byte slot",
                    range.start, range.end
                ),
            ));
        }
        Ok(())
    }

    pub fn get(
        &self,
        category: Category,
        name: &str,
        stride: usize,
        refs: &References<'_>,
    ) -> Result<ReadResult, CoreError> {
        let descriptor = field::lookup(category, name)?;
        self.read_field(descriptor, stride, refs)
    }

    pub fn read_field(
        &self,
        descriptor: &FieldDescriptor,
        stride: usize,
        refs: &References<'_>,
    ) -> Result<ReadResult, CoreError> {
        let address = descriptor.address(stride)?;
        let raw = self.range(ByteRange::new(address, address + descriptor.width))?;
        Ok(ReadResult {
            name: descriptor.name.to_string(),
            value: codec::bytes_to_int(raw),
            formatted: descriptor.codec.decode(raw, refs)?,
            raw: raw.to_vec(),
            address: self.file_address(address),
        })
    }

    pub fn set(
        &mut self,
        category: Category,
        name: &str,
        stride: usize,
        value: &str,
        refs: &References<'_>,
    ) -> Result<(), CoreError> {
        let descriptor = field::lookup(category, name)?;
        self.write_field(descriptor, stride, value, refs)
    }

    /// Encodes `value` and stores it zero-padded to the field width. Nothing
    /// is written when the encoding is longer than the field.
    pub fn write_field(
        &mut self,
        descriptor: &FieldDescriptor,
        stride: usize,
        value: &str,
        refs: &References<'_>,
    ) -> Result<(), CoreError> {
        let address = descriptor.address(stride)?;
        let mut encoded = descriptor.codec.encode(value, refs)?;
        if encoded.len() > descriptor.width {
            return Err(CoreError::new(
                CoreErrorCode::EncodedValueTooLarge,
                format!(
                    "'{value}' needs {} bytes but {} field '{}' is {} bytes wide",
                    encoded.len(),
                    descriptor.category,
                    descriptor.name,
                    descriptor.width
                ),
            ));
        }
        // Little-endian: appended zeros are the implied high bytes.
        encoded.resize(descriptor.width, 0);

        debug!(
            "slot {}: {} {}[{stride}] @{:#06x} <- {:02X?}",
            self.index,
            descriptor.category,
            descriptor.name,
            self.file_address(address),
            encoded
        );
        self.write_range(address, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceTables;

    fn blank(index: usize) -> Slot {
        Slot::from_bytes(index, vec![0; SLOT_SIZE]).expect("blank slot")
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Slot::from_bytes(0, vec![0; SLOT_SIZE - 1]).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::FileSizeMismatch);
        let err = Slot::from_bytes(3, vec![0; SLOT_SIZE]).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::SlotIndexOutOfRange);
    }

    #[test]
    fn short_encodings_are_zero_padded() {
        let tables = ReferenceTables::builtin();
        let refs = References::without_overlay(&tables);
        let mut slot = blank(0);
        slot.write_range(0x01f9, &[0xAA, 0xBB]).unwrap();

        slot.set(Category::Unit, "HP", 0, "7", &refs).unwrap();
        let hp = slot.get(Category::Unit, "HP", 0, &refs).unwrap();
        assert_eq!(hp.raw, vec![0x07, 0x00]);
        assert_eq!(hp.value, 7);
        assert_eq!(hp.formatted, "7");
    }

    #[test]
    fn oversized_values_leave_buffer_untouched() {
        let tables = ReferenceTables::builtin();
        let refs = References::without_overlay(&tables);
        let mut slot = blank(1);
        slot.set(Category::Unit, "LVL", 4, "12", &refs).unwrap();
        let before = slot.clone();

        let err = slot.set(Category::Unit, "LVL", 4, "256", &refs).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::EncodedValueTooLarge);
        assert_eq!(slot, before);

        let err = slot
            .set(Category::Misc, "LEADER_NAME", 0, "TOOLONGNAME", &refs)
            .unwrap_err();
        assert_eq!(err.code, CoreErrorCode::EncodedValueTooLarge);
        assert_eq!(slot, before);
    }

    #[test]
    fn addresses_are_absolute() {
        let tables = ReferenceTables::builtin();
        let refs = References::without_overlay(&tables);
        let slot = blank(1);
        let cost = slot.get(Category::Unit, "COST", 4, &refs).unwrap();
        assert_eq!(cost.address, 0x0fcc);
        let name = slot.get(Category::Unit, "NAME", 60, &refs).unwrap();
        assert_eq!(name.address, 0x1168);
    }

    #[test]
    fn raw_range_is_bounds_checked() {
        let mut slot = blank(0);
        assert!(slot.range(ByteRange::new(SLOT_SIZE - 2, SLOT_SIZE)).is_ok());
        assert!(slot.range(ByteRange::new(SLOT_SIZE - 1, SLOT_SIZE + 1)).is_err());
        assert!(slot.write_range(SLOT_SIZE - 1, &[1, 2]).is_err());
    }
}
