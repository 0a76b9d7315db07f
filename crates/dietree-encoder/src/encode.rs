//! Raw section contents for a finalized tree.
//!
//! Produces the bytes of `.debug_info`, `.debug_abbrev` and `.debug_str`.
//! Wrapping them in an object file (section headers, relocations) is left to
//! the consumer.

use dietree_core::{Form, write_uleb128};

use crate::config::UNIT_HEADER_SIZE;
use crate::error::ResolutionError;
use crate::info::{DebugInfo, ResolvedAttribute};

/// Encoded section contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sections {
    /// Entry stream covering `[base_offset, end_offset)`.
    pub info: Vec<u8>,
    pub abbrev: Vec<u8>,
    pub str: Vec<u8>,
}

/// Byte counts per section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SectionSizes {
    pub debug_info: usize,
    pub debug_abbrev: usize,
    pub debug_str: usize,
}

impl Sections {
    pub fn sizes(&self) -> SectionSizes {
        SectionSizes {
            debug_info: self.info.len(),
            debug_abbrev: self.abbrev.len(),
            debug_str: self.str.len(),
        }
    }
}

impl DebugInfo {
    /// Encode all sections.
    pub fn encode(&self) -> Sections {
        let mut info = Vec::with_capacity((self.end_offset - self.base_offset()) as usize);
        encode_entries(&mut info, self);
        debug_assert_eq!(info.len() as u64, self.end_offset - self.base_offset());

        tracing::debug!(
            info = info.len(),
            abbrev_count = self.abbrevs.len(),
            strings = self.strings.size(),
            "sections encoded"
        );

        Sections {
            info,
            abbrev: self.abbrevs.encode(),
            str: self.strings.as_bytes().to_vec(),
        }
    }

    /// DWARF32 compile unit header for this unit.
    ///
    /// `unit_length` covers the rest of the header and the entry stream. The
    /// abbreviation table is assumed to sit at offset 0 of `.debug_abbrev`.
    pub fn unit_header(&self) -> Result<Vec<u8>, ResolutionError> {
        let length = (self.end_offset - self.base_offset()).saturating_add(UNIT_HEADER_SIZE - 4);
        // 0xffff_fff0 and up are reserved escapes in DWARF32.
        let unit_length = u32::try_from(length)
            .ok()
            .filter(|&len| len < 0xffff_fff0)
            .ok_or(ResolutionError::UnitTooLarge { length })?;

        let mut out = Vec::with_capacity(UNIT_HEADER_SIZE as usize);
        out.extend_from_slice(&unit_length.to_le_bytes());
        out.extend_from_slice(&self.config.version.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.push(self.config.address_size);
        Ok(out)
    }
}

/// Write entries in pre-order, closing each children list once the walk
/// leaves its depth.
fn encode_entries(out: &mut Vec<u8>, info: &DebugInfo) {
    // Depths of entries whose children list is still open.
    let mut open: Vec<usize> = Vec::new();

    for die in info.iter() {
        while open.last().is_some_and(|&depth| depth >= die.depth()) {
            open.pop();
            out.push(0);
        }

        write_uleb128(out, die.abbrev().get());
        for attr in die.attributes() {
            encode_attribute(out, attr);
        }
        if die.has_children() {
            open.push(die.depth());
        }
    }

    out.extend(std::iter::repeat_n(0, open.len()));
}

fn encode_attribute(out: &mut Vec<u8>, attr: &ResolvedAttribute) {
    let value = attr.value.encoded();
    if attr.form == Form::UDATA {
        write_uleb128(out, value);
        return;
    }

    let width = attr.form.fixed_size().unwrap_or(0) as usize;
    out.extend_from_slice(&value.to_le_bytes()[..width]);
}
