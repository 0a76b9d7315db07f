//! Error types for tree construction, finalization and output.

use dietree_core::{AttrKind, Form};

use crate::value::{EntryId, StrOffset};

/// Invalid builder call. Detected at the call that introduced the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    #[error("entry {0} does not exist in this builder")]
    UnknownEntry(EntryId),

    #[error("entry arena is full ({0} entries)")]
    TooManyEntries(usize),

    #[error("{kind} on entry {entry}: value {value:#x} does not fit in {width} byte(s)")]
    ValueOverflow {
        entry: EntryId,
        kind: AttrKind,
        value: u64,
        width: u8,
    },

    #[error("{kind} on entry {entry}: form {form} is not supported")]
    UnsupportedForm {
        entry: EntryId,
        kind: AttrKind,
        form: Form,
    },

    #[error("string offset {offset} is outside the string pool ({size} bytes)")]
    StringOutOfBounds { offset: StrOffset, size: u32 },

    #[error("string offset {0} does not start a valid UTF-8 sequence")]
    MalformedString(StrOffset),

    #[error("string {0:?} contains an interior NUL byte")]
    InteriorNul(String),

    #[error("string pool exceeds the 4 GiB addressable by DW_FORM_strp")]
    PoolOverflow,

    #[error("entry {child} is already a child of entry {parent}")]
    AlreadyAttached { child: EntryId, parent: EntryId },

    #[error("attaching entry {child} under entry {parent} would make it its own ancestor")]
    CyclicOwnership { parent: EntryId, child: EntryId },

    #[error("reference width must be 1, 2, 4 or 8 bytes, got {0}")]
    InvalidRefWidth(u8),
}

/// Failure while laying out the tree or resolving references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("{kind} on entry {entry} refers to entry {target}, which is not part of the finalized tree")]
    DanglingReference {
        entry: EntryId,
        kind: AttrKind,
        target: EntryId,
    },

    #[error("{kind} on entry {entry}: offset {offset:#x} of entry {target} does not fit in {width} byte(s)")]
    OffsetOverflow {
        entry: EntryId,
        kind: AttrKind,
        target: EntryId,
        offset: u64,
        width: u8,
    },

    #[error("entry {entry}: abbreviation codes starting at {base} run past u64::MAX")]
    AbbrevCodeOverflow { entry: EntryId, base: u64 },

    #[error("entry {entry}: layout runs past offset u64::MAX")]
    LayoutOverflow { entry: EntryId },

    #[error("unit length {length:#x} does not fit a DWARF32 unit header")]
    UnitTooLarge { length: u64 },

    #[error("entry {0} has no offset: the tree has not been laid out")]
    NotFinalized(EntryId),

    #[error("entry {0} cannot be the root: it is unknown or has a parent")]
    InvalidRoot(EntryId),
}

/// Any failure surfaced by the encoder.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for encoder operations.
pub type Result<T> = std::result::Result<T, Error>;
