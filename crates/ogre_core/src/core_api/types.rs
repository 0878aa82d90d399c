use serde::{Deserialize, Serialize};

/// One decoded field instance. Built fresh by every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadResult {
    pub name: String,
    /// Little-endian integer reading of `raw`, whatever the field's codec.
    pub value: u64,
    pub formatted: String,
    pub raw: Vec<u8>,
    /// Absolute offset in the backing file.
    pub address: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksumReport {
    pub stored: u16,
    pub computed: u16,
}

impl ChecksumReport {
    pub fn matches(&self) -> bool {
        self.stored == self.computed
    }
}
