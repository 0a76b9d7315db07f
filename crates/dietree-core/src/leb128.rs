//! Unsigned LEB128 encoding.
//!
//! Abbreviation codes, tags and `DW_FORM_udata` values are stored as ULEB128:
//! seven payload bits per byte, low groups first, high bit set on every byte
//! except the last.

/// Errors from decoding a ULEB128 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Leb128Error {
    #[error("unterminated ULEB128 value")]
    Truncated,

    #[error("ULEB128 value does not fit in 64 bits")]
    Overflow,
}

/// Number of bytes `value` occupies when ULEB128-encoded.
#[inline]
pub fn uleb128_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

/// Append `value` to `out` as ULEB128.
pub fn write_uleb128(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Decode a ULEB128 value from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn read_uleb128(bytes: &[u8]) -> Result<(u64, usize), Leb128Error> {
    let mut value = 0u64;
    let mut shift = 0u32;

    for (i, &byte) in bytes.iter().enumerate() {
        let payload = u64::from(byte & 0x7f);
        if shift >= 64 || (shift == 63 && payload > 1) {
            return Err(Leb128Error::Overflow);
        }
        value |= payload << shift;
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
        shift += 7;
    }

    Err(Leb128Error::Truncated)
}
