//! dietree encoder: builds debugging information entry trees and lays them
//! out as DWARF-style sections.
//!
//! Pipeline:
//! - `tree` - arena of entries, attributes and owning child edges
//! - `string_pool` - deduplicated `.debug_str` contents
//! - `abbrev` - entry shapes and their abbreviation codes
//! - `layout` - pre-order offsets and reference resolution
//! - `encode` - raw section bytes
//! - `dump` - text rendering and section filtering
//! - `output` - atomic file output

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod abbrev;
pub mod config;
pub mod dump;
pub mod encode;
pub mod error;
pub mod info;
mod layout;
pub mod output;
pub mod string_pool;
pub mod tree;
pub mod value;

#[cfg(test)]
mod string_pool_tests;
#[cfg(test)]
pub mod test_utils;
#[cfg(test)]
mod tree_tests;

pub use abbrev::{AbbrevCode, AbbrevShape, AbbrevTable};
pub use config::{EncoderConfig, UNIT_HEADER_SIZE};
pub use dump::{DumpOptions, SectionFilter, render};
pub use encode::{SectionSizes, Sections};
pub use error::{ConstructionError, Error, ResolutionError, Result};
pub use info::{DebugInfo, Die, ResolvedAttribute, ResolvedValue};
pub use output::write_atomically;
pub use string_pool::StringPool;
pub use tree::{DebugInfoBuilder, Entry};
pub use value::{AttrValue, Attribute, EntryId, FixedWidth, IntForm, StrOffset};

pub use dietree_core::{AttrKind, Encoding, Form, Language, Tag};
