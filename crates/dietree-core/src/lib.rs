#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared vocabulary for the dietree debug-information encoder.
//!
//! - `dwarf` - tag, attribute, form, encoding and language constants
//! - `leb128` - unsigned LEB128 encoding

pub mod dwarf;
pub mod leb128;


pub use dwarf::{AttrKind, Encoding, Form, Language, Tag};
pub use leb128::{Leb128Error, read_uleb128, uleb128_len, write_uleb128};
