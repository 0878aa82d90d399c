use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builtin_tables::{self, BuiltinEntry};
use crate::core_api::{CoreError, CoreErrorCode};

/// Display name used when a code has no entry.
pub const UNKNOWN_NAME: &str = "unknown";
/// Item code 0 means the unit carries nothing.
pub const NO_ITEM_NAME: &str = "none";
/// Name code reserved for the opinion leader, whose name is typed in by the
/// player and stored in the slot rather than in the name table.
pub const LEADER_NAME_CODE: u64 = 0x0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Class,
    Item,
    Name,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Class, Domain::Item, Domain::Name];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Class => "class",
            Self::Item => "item",
            Self::Name => "name",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match *self {
            Self::Class => "classes.json",
            Self::Item => "items.json",
            Self::Name => "names.json",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(alias = "value")]
    pub code: u64,
    pub name: String,
    #[serde(default, alias = "descr", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&BuiltinEntry> for ReferenceEntry {
    fn from(entry: &BuiltinEntry) -> Self {
        Self {
            code: entry.code,
            name: entry.name.to_string(),
            description: None,
        }
    }
}

/// Ordered (code, name) list. Lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    fn from_builtin(entries: &[BuiltinEntry]) -> Self {
        Self::new(entries.iter().map(ReferenceEntry::from).collect())
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name_of(&self, code: u64) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.name.as_str())
    }

    pub fn code_of(&self, name: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.code)
    }
}

/// The three static code tables. Loaded once and shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    pub classes: ReferenceTable,
    pub items: ReferenceTable,
    pub names: ReferenceTable,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceTables {
    pub fn builtin() -> Self {
        Self {
            classes: ReferenceTable::from_builtin(builtin_tables::CLASSES),
            items: ReferenceTable::from_builtin(builtin_tables::ITEMS),
            names: ReferenceTable::from_builtin(builtin_tables::NAMES),
        }
    }

    /// Reads `classes.json`, `items.json` and `names.json` from `dir`. Each
    /// file is a JSON array of `{"code": .., "name": ..}` records; `value` is
    /// accepted for `code` and `descr` for `description`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CoreError> {
        Ok(Self {
            classes: load_table(dir, Domain::Class)?,
            items: load_table(dir, Domain::Item)?,
            names: load_table(dir, Domain::Name)?,
        })
    }

    pub fn table(&self, domain: Domain) -> &ReferenceTable {
        match domain {
            Domain::Class => &self.classes,
            Domain::Item => &self.items,
            Domain::Name => &self.names,
        }
    }
}

fn load_table(dir: &Path, domain: Domain) -> Result<ReferenceTable, CoreError> {
    let path = dir.join(domain.file_name());
    let text = fs::read_to_string(&path)
        .map_err(|e| CoreError::io(format!("failed to read {}", path.display()), e))?;
    let entries: Vec<ReferenceEntry> = serde_json::from_str(&text).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("failed to parse {} table {}: {e}", domain, path.display()),
        )
    })?;
    Ok(ReferenceTable::new(entries))
}

/// Per-session supplement to the name table holding the opinion leader's
/// name as read from the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameOverlay {
    leader: Option<ReferenceEntry>,
}

impl NameOverlay {
    pub fn with_leader(name: impl Into<String>) -> Self {
        Self {
            leader: Some(ReferenceEntry {
                code: LEADER_NAME_CODE,
                name: name.into(),
                description: None,
            }),
        }
    }

    pub fn leader_name(&self) -> Option<&str> {
        self.leader.as_ref().map(|e| e.name.as_str())
    }

    fn name_of(&self, code: u64) -> Option<&str> {
        self.leader
            .as_ref()
            .filter(|e| e.code == code)
            .map(|e| e.name.as_str())
    }

    fn code_of(&self, name: &str) -> Option<u64> {
        self.leader
            .as_ref()
            .filter(|e| e.name == name)
            .map(|e| e.code)
    }
}

/// What a codec sees: the shared tables plus the session's overlay.
#[derive(Debug, Clone, Copy)]
pub struct References<'a> {
    tables: &'a ReferenceTables,
    overlay: Option<&'a NameOverlay>,
}

impl<'a> References<'a> {
    pub fn new(tables: &'a ReferenceTables, overlay: &'a NameOverlay) -> Self {
        Self {
            tables,
            overlay: Some(overlay),
        }
    }

    pub fn without_overlay(tables: &'a ReferenceTables) -> Self {
        Self {
            tables,
            overlay: None,
        }
    }

    pub fn name_of(&self, domain: Domain, code: u64) -> Option<&'a str> {
        if domain == Domain::Name
            && let Some(name) = self.overlay.and_then(|o| o.name_of(code))
        {
            return Some(name);
        }
        self.tables.table(domain).name_of(code)
    }

    /// Table entries take precedence over the leader when encoding.
    pub fn code_of(&self, domain: Domain, name: &str) -> Option<u64> {
        self.tables.table(domain).code_of(name).or_else(|| match domain {
            Domain::Name => self.overlay.and_then(|o| o.code_of(name)),
            _ => None,
        })
    }
}
