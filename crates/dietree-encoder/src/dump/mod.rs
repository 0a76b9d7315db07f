//! Human-readable dumps.
//!
//! - `render` - text form of a finalized tree, abbreviations and strings
//! - `filter` - post-hoc removal of named sections from rendered text
//! - `palette` - ANSI colors by text role

mod filter;
mod palette;
mod render;

#[cfg(test)]
mod palette_tests;

pub use filter::{SectionFilter, is_section_header};
pub use render::{DumpOptions, render};
