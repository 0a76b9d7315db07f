//! Finalized, read-only debug information.

use dietree_core::{AttrKind, Form, Tag};

use crate::abbrev::{AbbrevCode, AbbrevTable};
use crate::config::EncoderConfig;
use crate::error::ResolutionError;
use crate::string_pool::StringPool;
use crate::value::{EntryId, StrOffset};

/// Attribute value after reference resolution.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResolvedValue {
    UInt(u64),
    Str(StrOffset),
    /// Reference rewritten to the target's final offset.
    Ref { target: EntryId, offset: u64 },
}

impl ResolvedValue {
    /// The integer written to the section for this value.
    pub fn encoded(&self) -> u64 {
        match *self {
            Self::UInt(value) => value,
            Self::Str(offset) => u64::from(offset.get()),
            Self::Ref { offset, .. } => offset,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResolvedAttribute {
    pub kind: AttrKind,
    pub form: Form,
    pub value: ResolvedValue,
}

/// A laid-out entry.
#[derive(Clone, Debug)]
pub struct Die {
    pub(crate) id: EntryId,
    pub(crate) tag: Tag,
    pub(crate) offset: u64,
    /// Abbreviation code plus attribute values, excluding children.
    pub(crate) size: u64,
    pub(crate) depth: usize,
    pub(crate) abbrev: AbbrevCode,
    pub(crate) attributes: Vec<ResolvedAttribute>,
    pub(crate) children: Vec<EntryId>,
}

impl Die {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Nesting level; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn abbrev(&self) -> AbbrevCode {
        self.abbrev
    }

    pub fn attributes(&self) -> &[ResolvedAttribute] {
        &self.attributes
    }

    pub fn attribute(&self, kind: AttrKind) -> Option<&ResolvedAttribute> {
        self.attributes.iter().find(|a| a.kind == kind)
    }

    pub fn children(&self) -> &[EntryId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Laid-out tree with resolved references, abbreviations and strings.
///
/// Produced by `DebugInfoBuilder::finalize`; immutable afterwards.
#[derive(Clone, Debug)]
pub struct DebugInfo {
    pub(crate) config: EncoderConfig,
    pub(crate) root: EntryId,
    /// Entries in pre-order.
    pub(crate) dies: Vec<Die>,
    /// Arena index to position in `dies`; `None` for entries outside the tree.
    pub(crate) index: Vec<Option<usize>>,
    pub(crate) abbrevs: AbbrevTable,
    pub(crate) strings: StringPool,
    /// Offset one past the last byte of the entry stream.
    pub(crate) end_offset: u64,
}

impl DebugInfo {
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn root(&self) -> &Die {
        &self.dies[0]
    }

    pub fn root_id(&self) -> EntryId {
        self.root
    }

    pub fn get(&self, id: EntryId) -> Option<&Die> {
        let pos = (*self.index.get(id.index())?)?;
        Some(&self.dies[pos])
    }

    /// Final offset of an entry.
    ///
    /// Entries that were allocated but never attached under the root were not
    /// laid out and have no offset.
    pub fn offset_of(&self, id: EntryId) -> Result<u64, ResolutionError> {
        self.get(id)
            .map(Die::offset)
            .ok_or(ResolutionError::NotFinalized(id))
    }

    /// Entries in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dies.iter()
    }

    /// Number of laid-out entries.
    pub fn len(&self) -> usize {
        self.dies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dies.is_empty()
    }

    pub fn base_offset(&self) -> u64 {
        self.config.base_offset
    }

    pub fn end_offset(&self) -> u64 {
        self.end_offset
    }

    pub fn abbrevs(&self) -> &AbbrevTable {
        &self.abbrevs
    }

    pub fn strings(&self) -> &StringPool {
        &self.strings
    }
}
