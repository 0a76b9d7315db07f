//! Offset layout and reference resolution.
//!
//! Layout is a single pre-order pass. Every attribute has a size that depends
//! only on its form (references are fixed width), so an entry's size is known
//! without knowing any offset:
//!
//! ```text
//! size(entry) = uleb_len(code) + Σ size(attribute)
//! ```
//!
//! An entry with children is followed by its subtree and a one-byte null
//! entry. Once every offset is known, a second pass rewrites references.
//!
//! Variable-width reference forms would break this: an entry's size would
//! depend on offsets computed after it. Supporting them means iterating the
//! pass until offsets stop changing.

use dietree_core::uleb128_len;

use crate::abbrev::{AbbrevCode, AbbrevTable};
use crate::config::EncoderConfig;
use crate::error::ResolutionError;
use crate::info::{DebugInfo, Die, ResolvedAttribute, ResolvedValue};
use crate::string_pool::StringPool;
use crate::tree::Entry;
use crate::value::{AttrValue, EntryId};

/// Size of the null entry closing a children list.
const NULL_ENTRY_SIZE: u64 = 1;

/// A laid-out entry before resolution.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placement {
    pub id: EntryId,
    pub offset: u64,
    pub size: u64,
    pub depth: usize,
    pub abbrev: AbbrevCode,
}

/// Result of the layout pass.
#[derive(Debug)]
pub(crate) struct Layout {
    /// Placements in pre-order.
    pub placements: Vec<Placement>,
    /// Arena index to position in `placements`.
    pub index: Vec<Option<usize>>,
    pub abbrevs: AbbrevTable,
    pub end_offset: u64,
}

enum Visit {
    Enter { id: EntryId, depth: usize },
    /// Null entry after the children of `parent`.
    CloseChildren { parent: EntryId },
}

/// Assign offsets and abbreviation codes in pre-order.
///
/// The root must exist and the owning edges must be acyclic; the builder
/// guarantees both. Fails if a code or an offset would pass `u64::MAX`.
pub(crate) fn compute(
    entries: &[Entry],
    root: EntryId,
    config: &EncoderConfig,
) -> Result<Layout, ResolutionError> {
    let mut abbrevs = AbbrevTable::new(config.abbrev_base);
    let mut placements = Vec::new();
    let mut index = vec![None; entries.len()];
    let mut cursor = config.base_offset;

    let mut stack = vec![Visit::Enter { id: root, depth: 0 }];
    while let Some(visit) = stack.pop() {
        let (id, depth) = match visit {
            Visit::Enter { id, depth } => (id, depth),
            Visit::CloseChildren { parent } => {
                cursor = advance(cursor, NULL_ENTRY_SIZE, parent)?;
                continue;
            }
        };

        let entry = &entries[id.index()];
        let abbrev = abbrevs
            .code_for(entry.shape())
            .ok_or(ResolutionError::AbbrevCodeOverflow {
                entry: id,
                base: config.abbrev_base,
            })?;
        let size = uleb128_len(abbrev.get()) as u64 + entry.attributes_size();

        index[id.index()] = Some(placements.len());
        placements.push(Placement {
            id,
            offset: cursor,
            size,
            depth,
            abbrev,
        });
        cursor = advance(cursor, size, id)?;

        if entry.has_children() {
            stack.push(Visit::CloseChildren { parent: id });
            for &child in entry.children.iter().rev() {
                stack.push(Visit::Enter {
                    id: child,
                    depth: depth + 1,
                });
            }
        }
    }

    tracing::debug!(
        entries = placements.len(),
        abbrevs = abbrevs.len(),
        base = config.base_offset,
        end = cursor,
        "layout complete"
    );

    Ok(Layout {
        placements,
        index,
        abbrevs,
        end_offset: cursor,
    })
}

fn advance(cursor: u64, by: u64, entry: EntryId) -> Result<u64, ResolutionError> {
    cursor
        .checked_add(by)
        .ok_or(ResolutionError::LayoutOverflow { entry })
}

/// Rewrite every reference to its target's offset and freeze the result.
pub(crate) fn resolve(
    entries: Vec<Entry>,
    root: EntryId,
    layout: Layout,
    strings: StringPool,
    config: EncoderConfig,
) -> Result<DebugInfo, ResolutionError> {
    let Layout {
        placements,
        index,
        abbrevs,
        end_offset,
    } = layout;

    let offset_of = |target: EntryId| -> Option<u64> {
        let pos = (*index.get(target.index())?)?;
        Some(placements[pos].offset)
    };

    let mut dies = Vec::with_capacity(placements.len());
    let mut resolved_refs = 0usize;

    for placement in &placements {
        let entry = &entries[placement.id.index()];
        let mut attributes = Vec::with_capacity(entry.attributes.len());

        for attr in &entry.attributes {
            let value = match attr.value {
                AttrValue::UInt { value, .. } => ResolvedValue::UInt(value),
                AttrValue::StringRef(offset) => ResolvedValue::Str(offset),
                AttrValue::EntryRef { target, width } => {
                    let offset =
                        offset_of(target).ok_or(ResolutionError::DanglingReference {
                            entry: placement.id,
                            kind: attr.kind,
                            target,
                        })?;
                    if !width.fits(offset) {
                        return Err(ResolutionError::OffsetOverflow {
                            entry: placement.id,
                            kind: attr.kind,
                            target,
                            offset,
                            width: width.bytes(),
                        });
                    }
                    resolved_refs += 1;
                    ResolvedValue::Ref { target, offset }
                }
            };
            attributes.push(ResolvedAttribute {
                kind: attr.kind,
                form: attr.form(),
                value,
            });
        }

        dies.push(Die {
            id: placement.id,
            tag: entry.tag,
            offset: placement.offset,
            size: placement.size,
            depth: placement.depth,
            abbrev: placement.abbrev,
            attributes,
            children: entry.children.clone(),
        });
    }

    tracing::debug!(references = resolved_refs, "references resolved");

    Ok(DebugInfo {
        config,
        root,
        dies,
        index,
        abbrevs,
        strings,
        end_offset,
    })
}
