//! Conversions between a field's raw bytes and its display value.
//!
//! All integers in a slot are little-endian. Encoders emit the shortest byte
//! sequence that represents the value; the accessor pads it to the field width.

use std::fmt;
use std::num::IntErrorKind;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::reference::{Domain, NO_ITEM_NAME, References, UNKNOWN_NAME};

pub trait Codec: Sync + fmt::Debug {
    fn decode(&self, bytes: &[u8], refs: &References<'_>) -> Result<String, CoreError>;
    fn encode(&self, value: &str, refs: &References<'_>) -> Result<Vec<u8>, CoreError>;
}

pub fn bytes_to_int(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Little-endian bytes of `value` without high zero bytes. Zero is `[0]`.
pub fn int_to_bytes(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    let mut rest = value;
    loop {
        out.push((rest & 0xFF) as u8);
        rest >>= 8;
        if rest == 0 {
            break;
        }
    }
    out
}

fn parse_int(value: &str) -> Result<u64, CoreError> {
    value.trim().parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => CoreError::new(
            CoreErrorCode::EncodedValueTooLarge,
            format!("'{value}' does not fit in any field"),
        ),
        _ => CoreError::new(
            CoreErrorCode::InvalidValue,
            format!("'{value}' is not an unsigned integer: {e}"),
        ),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerCodec;

impl Codec for IntegerCodec {
    fn decode(&self, bytes: &[u8], _refs: &References<'_>) -> Result<String, CoreError> {
        Ok(bytes_to_int(bytes).to_string())
    }

    fn encode(&self, value: &str, _refs: &References<'_>) -> Result<Vec<u8>, CoreError> {
        Ok(int_to_bytes(parse_int(value)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumCodec {
    pub domain: Domain,
}

impl Codec for EnumCodec {
    fn decode(&self, bytes: &[u8], refs: &References<'_>) -> Result<String, CoreError> {
        let code = bytes_to_int(bytes);
        if self.domain == Domain::Item && code == 0 {
            return Ok(NO_ITEM_NAME.to_string());
        }
        Ok(refs
            .name_of(self.domain, code)
            .unwrap_or(UNKNOWN_NAME)
            .to_string())
    }

    fn encode(&self, value: &str, refs: &References<'_>) -> Result<Vec<u8>, CoreError> {
        if self.domain == Domain::Item && value == NO_ITEM_NAME {
            return Ok(vec![0x00]);
        }
        let code = refs.code_of(self.domain, value).unwrap_or(0);
        Ok(int_to_bytes(code))
    }
}

/// Zero-padded ASCII text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiCodec;

impl Codec for AsciiCodec {
    fn decode(&self, bytes: &[u8], _refs: &References<'_>) -> Result<String, CoreError> {
        let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let text = &bytes[..end];
        if let Some(pos) = text.iter().position(|b| !b.is_ascii()) {
            return Err(CoreError::new(
                CoreErrorCode::DecodeFailure,
                format!(
                    "byte {:#04x} at position {pos} is not ASCII",
                    text[pos]
                ),
            ));
        }
        Ok(text.iter().map(|&b| b as char).collect())
    }

    fn encode(&self, value: &str, _refs: &References<'_>) -> Result<Vec<u8>, CoreError> {
        if !value.is_ascii() {
            return Err(CoreError::new(
                CoreErrorCode::InvalidValue,
                format!("'{value}' contains non-ASCII characters"),
            ));
        }
        Ok(value.as_bytes().to_vec())
    }
}

pub static INTEGER: IntegerCodec = IntegerCodec;
pub static ASCII: AsciiCodec = AsciiCodec;
pub static CLASS: EnumCodec = EnumCodec {
    domain: Domain::Class,
};
pub static ITEM: EnumCodec = EnumCodec {
    domain: Domain::Item,
};
pub static NAME: EnumCodec = EnumCodec {
    domain: Domain::Name,
};
