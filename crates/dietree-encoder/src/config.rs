//! Encoder configuration.

use crate::value::FixedWidth;

/// Size of a DWARF32 version 2-4 compile unit header:
/// `unit_length (4) | version (2) | debug_abbrev_offset (4) | address_size (1)`.
pub const UNIT_HEADER_SIZE: u64 = 11;

/// Numbering conventions for layout.
///
/// Defaults place the first entry right after a DWARF32 v4 unit header, use
/// `DW_FORM_ref4` references and number abbreviations from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Offset of the root entry.
    pub(crate) base_offset: u64,
    /// Width of entry references created with `add_reference`.
    pub(crate) ref_width: FixedWidth,
    /// Code of the first abbreviation.
    pub(crate) abbrev_base: u64,
    /// DWARF version written to the unit header.
    pub(crate) version: u16,
    /// Target address size written to the unit header.
    pub(crate) address_size: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            base_offset: UNIT_HEADER_SIZE,
            ref_width: FixedWidth::Four,
            abbrev_base: 1,
            version: 4,
            address_size: 8,
        }
    }
}

impl EncoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset at which layout starts.
    pub fn base_offset(mut self, value: u64) -> Self {
        self.base_offset = value;
        self
    }

    /// Set the default reference width.
    pub fn ref_width(mut self, value: FixedWidth) -> Self {
        self.ref_width = value;
        self
    }

    /// Set the first abbreviation code. Code 0 is reserved for null entries.
    pub fn abbrev_base(mut self, value: u64) -> Self {
        self.abbrev_base = value.max(1);
        self
    }

    /// Set the DWARF version for the unit header.
    pub fn version(mut self, value: u16) -> Self {
        self.version = value;
        self
    }

    /// Set the target address size for the unit header.
    pub fn address_size(mut self, value: u8) -> Self {
        self.address_size = value;
        self
    }

    pub fn get_base_offset(&self) -> u64 {
        self.base_offset
    }

    pub fn get_ref_width(&self) -> FixedWidth {
        self.ref_width
    }

    pub fn get_abbrev_base(&self) -> u64 {
        self.abbrev_base
    }

    pub fn get_version(&self) -> u16 {
        self.version
    }

    pub fn get_address_size(&self) -> u8 {
        self.address_size
    }
}
