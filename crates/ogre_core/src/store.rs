use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::layout::{self, FileLayout, SLOT_SIZE};
use crate::slot::Slot;

/// Reads slot `index` from the save file at `path`. The index is checked
/// before the file is opened.
pub fn load_slot(path: &Path, index: usize) -> Result<Slot, CoreError> {
    let range = layout::slot_range(index)?;

    let mut file = File::open(path)
        .map_err(|e| CoreError::io(format!("failed to open {}", path.display()), e))?;
    file.seek(SeekFrom::Start(range.start as u64))
        .map_err(|e| CoreError::io(format!("failed to seek in {}", path.display()), e))?;

    let mut bytes = Vec::with_capacity(SLOT_SIZE);
    file.take(SLOT_SIZE as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| CoreError::io(format!("failed to read {}", path.display()), e))?;
    if bytes.len() != SLOT_SIZE {
        return Err(CoreError::new(
            CoreErrorCode::FileSizeMismatch,
            format!(
                "{}: slot {index} at {:#06x} needs {SLOT_SIZE} bytes, only {} available",
                path.display(),
                range.start,
                bytes.len()
            ),
        ));
    }

    debug!(
        "loaded slot {index} from {} at {:#06x}",
        path.display(),
        range.start
    );
    Slot::from_bytes(index, bytes)
}

/// Writes `slot` back into the file at `path`, leaving every other byte as it
/// is on disk right now. The new content goes to a temporary file in the same
/// directory which then replaces the original.
pub fn persist_slot(path: &Path, slot: &Slot) -> Result<(), CoreError> {
    let mut content = fs::read(path)
        .map_err(|e| CoreError::io(format!("failed to re-read {}", path.display()), e))?;

    let file_layout = FileLayout::for_file_len(content.len());
    file_layout.validate()?;
    let Some(range) = file_layout.slot(slot.index()) else {
        return Err(CoreError::new(
            CoreErrorCode::FileSizeMismatch,
            format!(
                "{} is {} bytes, too short to hold slot {}",
                path.display(),
                content.len(),
                slot.index()
            ),
        ));
    };
    content[range.start..range.end].copy_from_slice(slot.bytes());

    write_atomically(path, &content)
}

pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), CoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
        CoreError::io(
            format!("failed to create temporary file in {}", dir.display()),
            e,
        )
    })?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.flush())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| CoreError::io(format!("failed to write {}", tmp.path().display()), e))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(|e| {
            CoreError::io(
                format!("failed to copy permissions of {}", path.display()),
                e,
            )
        })?;
    }

    tmp.persist(path)
        .map_err(|e| CoreError::io(format!("failed to replace {}", path.display()), e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::START_ADDRESS;

    #[test]
    fn write_atomically_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.srm");
        fs::write(&path, b"old content").unwrap();
        write_atomically(&path, b"new").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn persist_refuses_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.srm");
        fs::write(&path, vec![0u8; START_ADDRESS + 2 * SLOT_SIZE]).unwrap();
        let slot = load_slot(&path, 1).unwrap();

        fs::write(&path, vec![0u8; START_ADDRESS + SLOT_SIZE]).unwrap();
        let err = persist_slot(&path, &slot).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::FileSizeMismatch);
        assert_eq!(fs::read(&path).unwrap().len(), START_ADDRESS + SLOT_SIZE);
    }
}
