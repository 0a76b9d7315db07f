//! Entry arena and the builder that grows it.
//!
//! Entries live in a flat arena and are addressed by `EntryId`. Two kinds of
//! edges connect them:
//! - child lists, which own entries and must stay acyclic;
//! - `EntryRef` attribute values, which only name an entry and may point
//!   anywhere, including forward, backward, or at the entry itself.

use dietree_core::{AttrKind, Form, Tag};

use crate::abbrev::AbbrevShape;
use crate::config::EncoderConfig;
use crate::error::{ConstructionError, ResolutionError};
use crate::info::DebugInfo;
use crate::layout;
use crate::string_pool::StringPool;
use crate::value::{AttrValue, Attribute, EntryId, FixedWidth, IntForm, StrOffset};

/// A debugging information entry under construction.
#[derive(Debug, Clone)]
pub struct Entry {
    pub(crate) tag: Tag,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<EntryId>,
    pub(crate) parent: Option<EntryId>,
}

impl Entry {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[EntryId] {
        &self.children
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Structural shape used for abbreviation lookup.
    pub(crate) fn shape(&self) -> AbbrevShape {
        AbbrevShape {
            tag: self.tag,
            has_children: self.has_children(),
            attributes: self.attributes.iter().map(|a| (a.kind, a.form())).collect(),
        }
    }

    /// Bytes taken by the attribute values, excluding the abbreviation code.
    pub(crate) fn attributes_size(&self) -> u64 {
        self.attributes.iter().map(|a| a.value.encoded_size()).sum()
    }
}

/// Builds a tree of entries and its string pool.
///
/// Construction is monotonic: entries, attributes and children are only ever
/// added. `finalize` consumes the builder, so nothing can change once offsets
/// have been computed.
#[derive(Debug, Clone, Default)]
pub struct DebugInfoBuilder {
    config: EncoderConfig,
    entries: Vec<Entry>,
    strings: StringPool,
}

impl DebugInfoBuilder {
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            strings: StringPool::new(),
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Allocate a detached entry.
    ///
    /// The arena holds at most `u32::MAX + 1` entries.
    pub fn new_entry(&mut self, tag: Tag) -> Result<EntryId, ConstructionError> {
        let len = self.entries.len();
        let id = EntryId::try_new(len).ok_or(ConstructionError::TooManyEntries(len))?;
        self.entries.push(Entry::new(tag));
        Ok(id)
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.index())
    }

    /// Number of allocated entries, attached or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn strings(&self) -> &StringPool {
        &self.strings
    }

    /// Intern a string without attaching it to any entry.
    pub fn intern(&mut self, s: &str) -> Result<StrOffset, ConstructionError> {
        self.strings.add(s)
    }

    /// Append an attribute to `entry`.
    ///
    /// Integers must fit their fixed width and string offsets must point into
    /// the pool. Reference targets are not checked here: they may name entries
    /// that get their content (or their parent) later.
    pub fn add_attribute(
        &mut self,
        entry: EntryId,
        kind: AttrKind,
        value: AttrValue,
    ) -> Result<(), ConstructionError> {
        self.require(entry)?;

        match value {
            AttrValue::UInt {
                value,
                form: IntForm::Fixed(width),
            } if !width.fits(value) => {
                return Err(ConstructionError::ValueOverflow {
                    entry,
                    kind,
                    value,
                    width: width.bytes(),
                });
            }
            AttrValue::StringRef(offset) => self.strings.check(offset)?,
            _ => {}
        }

        self.entries[entry.index()]
            .attributes
            .push(Attribute::new(kind, value));
        Ok(())
    }

    /// Intern `s` and attach it as a `DW_FORM_strp` attribute.
    pub fn add_string(
        &mut self,
        entry: EntryId,
        kind: AttrKind,
        s: &str,
    ) -> Result<StrOffset, ConstructionError> {
        self.require(entry)?;
        let offset = self.strings.add(s)?;
        self.add_attribute(entry, kind, AttrValue::StringRef(offset))?;
        Ok(offset)
    }

    /// Attach a fixed-width unsigned constant (`DW_FORM_data*`).
    pub fn add_data(
        &mut self,
        entry: EntryId,
        kind: AttrKind,
        value: u64,
        width: FixedWidth,
    ) -> Result<(), ConstructionError> {
        self.add_attribute(entry, kind, AttrValue::data(value, width))
    }

    /// Attach a ULEB128 unsigned constant (`DW_FORM_udata`).
    pub fn add_udata(
        &mut self,
        entry: EntryId,
        kind: AttrKind,
        value: u64,
    ) -> Result<(), ConstructionError> {
        self.add_attribute(entry, kind, AttrValue::udata(value))
    }

    /// Attach a reference to `target` using the configured reference width.
    pub fn add_reference(
        &mut self,
        entry: EntryId,
        kind: AttrKind,
        target: EntryId,
    ) -> Result<(), ConstructionError> {
        let width = self.config.ref_width;
        self.add_attribute(entry, kind, AttrValue::reference(target, width))
    }

    /// Attach an unsigned constant with an explicit `DW_FORM_*` code.
    ///
    /// Only `data1/2/4/8` and `udata` are accepted; everything else, including
    /// the variable-width `ref_udata`, is rejected.
    pub fn add_form(
        &mut self,
        entry: EntryId,
        kind: AttrKind,
        form: Form,
        value: u64,
    ) -> Result<(), ConstructionError> {
        self.require(entry)?;
        let value = match form {
            Form::DATA1 => AttrValue::data(value, FixedWidth::One),
            Form::DATA2 => AttrValue::data(value, FixedWidth::Two),
            Form::DATA4 => AttrValue::data(value, FixedWidth::Four),
            Form::DATA8 => AttrValue::data(value, FixedWidth::Eight),
            Form::UDATA => AttrValue::udata(value),
            _ => return Err(ConstructionError::UnsupportedForm { entry, kind, form }),
        };
        self.add_attribute(entry, kind, value)
    }

    /// Make `child` the last child of `parent`.
    ///
    /// An entry has at most one parent, and the owning edges must not form a
    /// cycle.
    pub fn add_child(&mut self, parent: EntryId, child: EntryId) -> Result<(), ConstructionError> {
        self.require(parent)?;
        self.require(child)?;

        if let Some(existing) = self.entries[child.index()].parent {
            return Err(ConstructionError::AlreadyAttached {
                child,
                parent: existing,
            });
        }

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(ConstructionError::CyclicOwnership { parent, child });
            }
            ancestor = self.entries[id.index()].parent;
        }

        self.entries[child.index()].parent = Some(parent);
        self.entries[parent.index()].children.push(child);
        Ok(())
    }

    /// Offsets do not exist before finalize.
    pub fn offset_of(&self, entry: EntryId) -> Result<u64, ResolutionError> {
        Err(ResolutionError::NotFinalized(entry))
    }

    /// Lay out the tree rooted at `root` and resolve every reference.
    ///
    /// Entries not reachable from `root` get no offset; referring to one of
    /// them is a dangling reference.
    pub fn finalize(self, root: EntryId) -> Result<DebugInfo, ResolutionError> {
        match self.entries.get(root.index()) {
            Some(entry) if entry.parent.is_none() => {}
            _ => return Err(ResolutionError::InvalidRoot(root)),
        }

        tracing::debug!(
            entries = self.entries.len(),
            strings = self.strings.len(),
            %root,
            "finalizing debug info"
        );

        let layout = layout::compute(&self.entries, root, &self.config)?;
        layout::resolve(self.entries, root, layout, self.strings, self.config)
    }

    fn require(&self, id: EntryId) -> Result<(), ConstructionError> {
        if id.index() < self.entries.len() {
            Ok(())
        } else {
            Err(ConstructionError::UnknownEntry(id))
        }
    }
}
