use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::checksum;
use crate::codec;
use crate::field::{self, Category, LEADER_NAME_FIELD};
use crate::layout::{ByteRange, FileLayout};
use crate::reference::{NameOverlay, ReferenceTables, References, UNKNOWN_NAME};
use crate::slot::Slot;
use crate::store;

use super::error::{CoreError, CoreErrorCode};
use super::types::{ChecksumReport, ReadResult};

/// Entry point for opening slots. Cheap to clone; all sessions opened from one
/// engine share its reference tables.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    tables: Arc<ReferenceTables>,
}

/// One slot of one save file, loaded into memory.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    slot: Slot,
    tables: Arc<ReferenceTables>,
    overlay: NameOverlay,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_tables(ReferenceTables::builtin())
    }

    pub fn with_tables(tables: ReferenceTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn open<P: AsRef<Path>>(&self, path: P, slot_index: usize) -> Result<Session, CoreError> {
        let path = path.as_ref();
        let slot = store::load_slot(path, slot_index)?;
        let overlay = leader_overlay(&slot, &self.tables)?;
        Ok(Session {
            path: path.to_path_buf(),
            slot,
            tables: Arc::clone(&self.tables),
            overlay,
        })
    }

    pub fn file_layout<P: AsRef<Path>>(&self, path: P) -> Result<FileLayout, CoreError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .map_err(|e| CoreError::io(format!("failed to stat {}", path.display()), e))?;
        let layout = FileLayout::for_file_len(metadata.len() as usize);
        layout.validate()?;
        Ok(layout)
    }
}

/// Reads the opinion leader's name from the slot. Slots that were never used
/// hold filler instead of text, so a failed decode falls back to "unknown".
fn leader_overlay(slot: &Slot, tables: &ReferenceTables) -> Result<NameOverlay, CoreError> {
    let refs = References::without_overlay(tables);
    match slot.get(Category::Misc, LEADER_NAME_FIELD, 0, &refs) {
        Ok(read) => Ok(NameOverlay::with_leader(read.formatted)),
        Err(e) if e.code == CoreErrorCode::DecodeFailure => {
            warn!(
                "slot {}: leader name is not ASCII, using '{UNKNOWN_NAME}': {}",
                slot.index(),
                e.message
            );
            Ok(NameOverlay::with_leader(UNKNOWN_NAME))
        }
        Err(e) => Err(e),
    }
}

impl Session {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slot_index(&self) -> usize {
        self.slot.index()
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn leader_name(&self) -> &str {
        self.overlay.leader_name().unwrap_or(UNKNOWN_NAME)
    }

    pub fn references(&self) -> References<'_> {
        References::new(&self.tables, &self.overlay)
    }

    pub fn get(
        &self,
        category: Category,
        name: &str,
        stride: usize,
    ) -> Result<ReadResult, CoreError> {
        self.slot.get(category, name, stride, &self.references())
    }

    pub fn set(
        &mut self,
        category: Category,
        name: &str,
        stride: usize,
        value: &str,
    ) -> Result<(), CoreError> {
        let descriptor = field::lookup(category, name)?;
        let refs = References::new(&self.tables, &self.overlay);
        self.slot.write_field(descriptor, stride, value, &refs)?;
        if descriptor.category == Category::Misc && descriptor.name == LEADER_NAME_FIELD {
            self.overlay = leader_overlay(&self.slot, &self.tables)?;
        }
        Ok(())
    }

    pub fn get_unit_info(&self, unit_index: usize, name: &str) -> Result<ReadResult, CoreError> {
        self.get(Category::Unit, name, unit_index)
    }

    pub fn set_unit_info(
        &mut self,
        unit_index: usize,
        name: &str,
        value: &str,
    ) -> Result<(), CoreError> {
        self.set(Category::Unit, name, unit_index, value)
    }

    pub fn get_misc_info(&self, name: &str) -> Result<ReadResult, CoreError> {
        self.get(Category::Misc, name, 0)
    }

    pub fn set_misc_info(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        self.set(Category::Misc, name, 0, value)
    }

    /// Same as [`Session::get_misc_info`], except that a LEADER_NAME holding
    /// filler bytes reads as "unknown" with its raw bytes intact.
    pub fn get_misc_display(&self, name: &str) -> Result<ReadResult, CoreError> {
        let descriptor = field::lookup(Category::Misc, name)?;
        match self.slot.read_field(descriptor, 0, &self.references()) {
            Err(e)
                if e.code == CoreErrorCode::DecodeFailure && descriptor.name == LEADER_NAME_FIELD =>
            {
                let address = descriptor.address(0)?;
                let raw = self
                    .slot
                    .range(ByteRange::new(address, address + descriptor.width))?;
                Ok(ReadResult {
                    name: descriptor.name.to_string(),
                    value: codec::bytes_to_int(raw),
                    formatted: UNKNOWN_NAME.to_string(),
                    raw: raw.to_vec(),
                    address: self.slot.file_address(address),
                })
            }
            other => other,
        }
    }

    /// Every unit field of one unit, in display order.
    pub fn unit(&self, unit_index: usize) -> Result<Vec<ReadResult>, CoreError> {
        field::UNIT_DISPLAY_ORDER
            .iter()
            .map(|name| self.get_unit_info(unit_index, name))
            .collect()
    }

    pub fn misc(&self) -> Result<Vec<ReadResult>, CoreError> {
        field::MISC_DISPLAY_ORDER
            .iter()
            .map(|name| self.get_misc_display(name))
            .collect()
    }

    pub fn get_checksum(&self) -> Result<ReadResult, CoreError> {
        checksum::stored(&self.slot, &self.references())
    }

    pub fn compute_checksum(&self) -> Result<u16, CoreError> {
        checksum::compute(&self.slot)
    }

    pub fn compute_checksum_result(&self) -> Result<ReadResult, CoreError> {
        checksum::computed_result(&self.slot)
    }

    pub fn checksum_report(&self) -> Result<ChecksumReport, CoreError> {
        Ok(ChecksumReport {
            stored: self.get_checksum()?.value as u16,
            computed: self.compute_checksum()?,
        })
    }

    pub fn update_checksum(&mut self) -> Result<u16, CoreError> {
        let refs = References::new(&self.tables, &self.overlay);
        checksum::update(&mut self.slot, &refs)
    }

    /// Refreshes the checksum and writes the slot back into its file.
    pub fn save(&mut self) -> Result<(), CoreError> {
        let value = self.update_checksum()?;
        store::persist_slot(&self.path, &self.slot)?;
        info!(
            "saved slot {} to {} (checksum {value:#06x})",
            self.slot.index(),
            self.path.display()
        );
        Ok(())
    }
}
