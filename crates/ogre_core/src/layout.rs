use crate::core_api::{CoreError, CoreErrorCode};

/// Number of ignored bytes before the first slot.
pub const START_ADDRESS: usize = 0x0001;
pub const SLOT_SIZE: usize = 0x0AAA;
pub const SLOT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        (self.start..self.end).contains(&offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Pad,
    Slot(u8),
    Tail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub id: SectionId,
    pub range: ByteRange,
}

#[derive(Debug, Clone)]
pub struct FileLayout {
    pub file_len: usize,
    pub sections: Vec<SectionLayout>,
}

pub fn check_slot_index(index: usize) -> Result<(), CoreError> {
    if index >= SLOT_COUNT {
        return Err(CoreError::new(
            CoreErrorCode::SlotIndexOutOfRange,
            format!(
                "slot {index} does not exist, expected 0..{}",
                SLOT_COUNT - 1
            ),
        ));
    }
    Ok(())
}

/// Absolute file range occupied by slot `index`.
pub fn slot_range(index: usize) -> Result<ByteRange, CoreError> {
    check_slot_index(index)?;
    let start = START_ADDRESS + index * SLOT_SIZE;
    Ok(ByteRange::new(start, start + SLOT_SIZE))
}

impl FileLayout {
    /// Splits a file of `file_len` bytes into pad, slots and trailing bytes.
    /// Slots that do not fit completely are left out.
    pub fn for_file_len(file_len: usize) -> Self {
        let mut sections = Vec::with_capacity(SLOT_COUNT + 2);
        let pad_end = START_ADDRESS.min(file_len);
        sections.push(SectionLayout {
            id: SectionId::Pad,
            range: ByteRange::new(0, pad_end),
        });

        let mut cursor = pad_end;
        for index in 0..SLOT_COUNT {
            let end = cursor + SLOT_SIZE;
            if end > file_len {
                break;
            }
            sections.push(SectionLayout {
                id: SectionId::Slot(index as u8),
                range: ByteRange::new(cursor, end),
            });
            cursor = end;
        }

        if cursor < file_len {
            sections.push(SectionLayout {
                id: SectionId::Tail,
                range: ByteRange::new(cursor, file_len),
            });
        }

        Self { file_len, sections }
    }

    pub fn slot(&self, index: usize) -> Option<ByteRange> {
        self.sections
            .iter()
            .find(|s| s.id == SectionId::Slot(index as u8))
            .map(|s| s.range)
    }

    pub fn slot_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.id, SectionId::Slot(_)))
            .count()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let Some(first) = self.sections.first() else {
            return Err(CoreError::new(
                CoreErrorCode::FileSizeMismatch,
                "file layout must contain at least one section",
            ));
        };

        if first.range.start != 0 {
            return Err(CoreError::new(
                CoreErrorCode::FileSizeMismatch,
                "layout does not start at byte 0",
            ));
        }

        let mut expected = 0usize;
        for section in &self.sections {
            if section.range.start != expected {
                return Err(CoreError::new(
                    CoreErrorCode::FileSizeMismatch,
                    format!(
                        "layout gap/overlap around section {:?}: expected start {}, got {}",
                        section.id, expected, section.range.start
                    ),
                ));
            }
            if let SectionId::Slot(_) = section.id
                && section.range.len() != SLOT_SIZE
            {
                return Err(CoreError::new(
                    CoreErrorCode::FileSizeMismatch,
                    format!(
                        "section {:?} is {} bytes, expected {SLOT_SIZE}",
                        section.id,
                        section.range.len()
                    ),
                ));
            }
            expected = section.range.end;
        }

        if expected != self.file_len {
            return Err(CoreError::new(
                CoreErrorCode::FileSizeMismatch,
                format!(
                    "layout does not cover file: ended at {}, file length {}",
                    expected, self.file_len
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_file_has_pad_and_three_slots() {
        let layout = FileLayout::for_file_len(START_ADDRESS + SLOT_COUNT * SLOT_SIZE);
        layout.validate().expect("layout should be valid");
        assert_eq!(layout.slot_count(), 3);
        assert_eq!(layout.slot(1), Some(ByteRange::new(0x0AAB, 0x1555)));
        assert!(!layout.sections.iter().any(|s| s.id == SectionId::Tail));
    }

    #[test]
    fn short_file_keeps_partial_slot_as_tail() {
        let layout = FileLayout::for_file_len(START_ADDRESS + SLOT_SIZE + 10);
        layout.validate().expect("layout should be valid");
        assert_eq!(layout.slot_count(), 1);
        assert_eq!(layout.slot(1), None);
        let tail = layout.sections.last().expect("tail section");
        assert_eq!(tail.id, SectionId::Tail);
        assert_eq!(tail.range.len(), 10);
    }

    #[test]
    fn slot_range_rejects_fourth_slot() {
        assert_eq!(slot_range(2).unwrap().end, START_ADDRESS + 3 * SLOT_SIZE);
        let err = slot_range(3).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::SlotIndexOutOfRange);
    }
}
