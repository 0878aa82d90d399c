use std::fmt::Write as _;

use ogre_core::core_api::{ChecksumReport, ReadResult};
use ogre_core::layout::{FileLayout, SectionId};
use serde_json::{Map as JsonMap, Value as JsonValue};

const FIELD_NAME_WIDTH: usize = 20;
const FIELD_VALUE_WIDTH: usize = 20;
const RULE_WIDTH: usize = 60;

/// Space separated `0xNN` bytes.
pub fn format_raw(raw: &[u8]) -> String {
    raw.iter()
        .map(|b| format!("{b:#04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

pub fn render_field_line(read: &ReadResult) -> String {
    format!(
        "{:>name_w$}: {:<value_w$} [@{:#06x} raw: {}]",
        read.name,
        read.formatted,
        read.address,
        format_raw(&read.raw),
        name_w = FIELD_NAME_WIDTH,
        value_w = FIELD_VALUE_WIDTH,
    )
}

pub fn render_unit_text(unit_index: usize, fields: &[ReadResult]) -> String {
    let mut out = String::new();
    let header = format!("=( {unit_index:>3} )==");
    let _ = writeln!(out, "{header}{}", "=".repeat(RULE_WIDTH - header.len()));
    for read in fields {
        let _ = writeln!(out, "{}", render_field_line(read));
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    out
}

pub fn render_misc_text(fields: &[ReadResult]) -> String {
    let mut out = String::new();
    for read in fields {
        let _ = writeln!(out, "{}", render_field_line(read));
    }
    out
}

/// One line describing an edit, e.g. `UNIT 5 - LVL: 3 -> 99 [@0x0137 0x03 .. 0x63]`.
pub fn render_update_line(unit_index: Option<usize>, old: &ReadResult, new: &ReadResult) -> String {
    let prefix = match unit_index {
        Some(index) => format!("UNIT {index} - "),
        None => String::new(),
    };
    format!(
        "{prefix}{}: {} -> {} [@{:#06x} {} .. {}]",
        old.name,
        old.formatted,
        new.formatted,
        old.address,
        format_raw(&old.raw),
        format_raw(&new.raw),
    )
}

pub fn render_checksum_text(stored: &ReadResult, computed: &ReadResult) -> String {
    let mut out = String::new();
    for read in [stored, computed] {
        let _ = writeln!(
            out,
            "{:>name_w$}: {} [raw: {}]",
            read.name,
            read.value,
            format_raw(&read.raw),
            name_w = FIELD_NAME_WIDTH,
        );
    }
    let status = if stored.value == computed.value {
        "OK"
    } else {
        "MISMATCH"
    };
    let _ = writeln!(out, "{:>name_w$}: {status}", "STATUS", name_w = FIELD_NAME_WIDTH);
    out
}

fn section_label(id: SectionId) -> String {
    match id {
        SectionId::Pad => "pad".to_string(),
        SectionId::Slot(index) => format!("slot {index}"),
        SectionId::Tail => "tail".to_string(),
    }
}

pub fn render_layout_text(layout: &FileLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "file length: {} bytes", layout.file_len);
    for section in &layout.sections {
        let _ = writeln!(
            out,
            "  {:<8} {:#06x}..{:#06x} ({} bytes)",
            section_label(section.id),
            section.range.start,
            section.range.end,
            section.range.len()
        );
    }
    out
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

pub fn read_result_to_json(read: &ReadResult) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("name".to_string(), JsonValue::String(read.name.clone()));
    m.insert("value".to_string(), JsonValue::from(read.value));
    m.insert(
        "formatted".to_string(),
        JsonValue::String(read.formatted.clone()),
    );
    m.insert(
        "raw".to_string(),
        JsonValue::Array(read.raw.iter().map(|&b| JsonValue::from(b)).collect()),
    );
    m.insert("address".to_string(), JsonValue::from(read.address));
    JsonValue::Object(m)
}

fn fields_to_json(fields: &[ReadResult]) -> JsonValue {
    JsonValue::Array(fields.iter().map(read_result_to_json).collect())
}

pub fn units_to_json(units: &[(usize, Vec<ReadResult>)]) -> JsonValue {
    JsonValue::Array(
        units
            .iter()
            .map(|(index, fields)| {
                let mut m = JsonMap::new();
                m.insert("unit".to_string(), JsonValue::from(*index));
                m.insert("fields".to_string(), fields_to_json(fields));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

pub fn misc_to_json(fields: &[ReadResult]) -> JsonValue {
    fields_to_json(fields)
}

pub fn update_to_json(unit_index: Option<usize>, old: &ReadResult, new: &ReadResult) -> JsonValue {
    let mut m = JsonMap::new();
    if let Some(index) = unit_index {
        m.insert("unit".to_string(), JsonValue::from(index));
    }
    m.insert("old".to_string(), read_result_to_json(old));
    m.insert("new".to_string(), read_result_to_json(new));
    JsonValue::Object(m)
}

pub fn checksum_to_json(report: &ChecksumReport) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("stored".to_string(), JsonValue::from(report.stored));
    m.insert("computed".to_string(), JsonValue::from(report.computed));
    m.insert("matches".to_string(), JsonValue::Bool(report.matches()));
    JsonValue::Object(m)
}

pub fn layout_to_json(layout: &FileLayout) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("file_len".to_string(), JsonValue::from(layout.file_len));
    out.insert(
        "sections".to_string(),
        JsonValue::Array(
            layout
                .sections
                .iter()
                .map(|section| {
                    let mut m = JsonMap::new();
                    m.insert(
                        "id".to_string(),
                        JsonValue::String(section_label(section.id)),
                    );
                    m.insert("start".to_string(), JsonValue::from(section.range.start));
                    m.insert("end".to_string(), JsonValue::from(section.range.end));
                    JsonValue::Object(m)
                })
                .collect(),
        ),
    );
    JsonValue::Object(out)
}
