//! Abbreviation table: deduplicated entry shapes and their codes.
//!
//! A shape is everything about an entry except its attribute values. Codes
//! are handed out in the order shapes are first seen, which during layout is
//! pre-order traversal order.

use std::fmt;

use indexmap::IndexSet;

use dietree_core::dwarf::{CHILDREN_NO, CHILDREN_YES};
use dietree_core::{AttrKind, Form, Tag, write_uleb128};

/// Structural template of an entry.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct AbbrevShape {
    pub tag: Tag,
    pub has_children: bool,
    pub attributes: Vec<(AttrKind, Form)>,
}

/// Abbreviation code as written before each entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct AbbrevCode(u64);

impl AbbrevCode {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AbbrevCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Abbreviation table for one unit.
#[derive(Debug, Clone)]
pub struct AbbrevTable {
    /// Code of the first shape.
    base: u64,
    /// Shapes in code order; code = base + index.
    shapes: IndexSet<AbbrevShape>,
}

impl AbbrevTable {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            shapes: IndexSet::new(),
        }
    }

    /// Code for `shape`, allocating the next one if the shape is new.
    ///
    /// Returns `None` when the next code would not fit in a `u64`; the table
    /// is left unchanged in that case.
    pub fn code_for(&mut self, shape: AbbrevShape) -> Option<AbbrevCode> {
        if let Some(code) = self.lookup(&shape) {
            return Some(code);
        }

        let code = self.base.checked_add(self.shapes.len() as u64)?;
        self.shapes.insert(shape);
        tracing::trace!(code, "new abbreviation");
        Some(AbbrevCode(code))
    }

    /// Code of an already registered shape.
    ///
    /// Every registered code was range-checked by `code_for`.
    pub fn lookup(&self, shape: &AbbrevShape) -> Option<AbbrevCode> {
        self.shapes
            .get_index_of(shape)
            .map(|index| AbbrevCode(self.base + index as u64))
    }

    pub fn get(&self, code: AbbrevCode) -> Option<&AbbrevShape> {
        let index = code.get().checked_sub(self.base)?;
        self.shapes.get_index(usize::try_from(index).ok()?)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Iterate over `(code, shape)` in code order.
    pub fn iter(&self) -> impl Iterator<Item = (AbbrevCode, &AbbrevShape)> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| (AbbrevCode(self.base + index as u64), shape))
    }

    /// Encode as `.debug_abbrev` contents.
    ///
    /// Per shape: `code, tag, children flag, (attribute, form)*, 0, 0`; the
    /// table ends with a single 0.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (code, shape) in self.iter() {
            write_uleb128(&mut out, code.get());
            write_uleb128(&mut out, u64::from(shape.tag.get()));
            out.push(if shape.has_children {
                CHILDREN_YES
            } else {
                CHILDREN_NO
            });
            for &(kind, form) in &shape.attributes {
                write_uleb128(&mut out, u64::from(kind.get()));
                write_uleb128(&mut out, u64::from(form.get()));
            }
            out.extend_from_slice(&[0, 0]);
        }
        out.push(0);
        out
    }
}
