//! Attribute values and the forms that encode them.

use std::fmt;

use dietree_core::{AttrKind, Form, uleb128_len};

use crate::error::ConstructionError;

/// Size of a `DW_FORM_strp` offset (DWARF32).
pub const STRP_SIZE: u64 = 4;

/// Handle to an entry in the builder's arena.
///
/// Handles are plain indices: creating one does not attach the entry anywhere,
/// and references through a handle are resolved only at finalize time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[repr(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// `None` once `index` no longer fits the 32-bit handle.
    #[inline]
    pub(crate) fn try_new(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Create an id from a raw index. Use only for diagnostics and tests.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Byte offset of a string in the string pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[repr(transparent)]
pub struct StrOffset(pub u32);

impl StrOffset {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StrOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Fixed encoding width for integers and entry references.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FixedWidth {
    One,
    Two,
    Four,
    Eight,
}

impl FixedWidth {
    pub fn from_bytes(bytes: u8) -> Result<Self, ConstructionError> {
        match bytes {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            other => Err(ConstructionError::InvalidRefWidth(other)),
        }
    }

    #[inline]
    pub fn bytes(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Largest value representable in this width.
    pub fn max_value(self) -> u64 {
        match self {
            Self::Eight => u64::MAX,
            narrow => (1u64 << (u32::from(narrow.bytes()) * 8)) - 1,
        }
    }

    #[inline]
    pub fn fits(self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// `DW_FORM_data{1,2,4,8}` for this width.
    pub fn data_form(self) -> Form {
        match self {
            Self::One => Form::DATA1,
            Self::Two => Form::DATA2,
            Self::Four => Form::DATA4,
            Self::Eight => Form::DATA8,
        }
    }

    /// `DW_FORM_ref{1,2,4,8}` for this width.
    pub fn ref_form(self) -> Form {
        match self {
            Self::One => Form::REF1,
            Self::Two => Form::REF2,
            Self::Four => Form::REF4,
            Self::Eight => Form::REF8,
        }
    }
}

/// Encoding of an unsigned integer attribute.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum IntForm {
    Fixed(FixedWidth),
    Uleb,
}

/// Value of an attribute before layout.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttrValue {
    UInt { value: u64, form: IntForm },
    StringRef(StrOffset),
    /// Logical reference to another entry; becomes the target's offset at finalize.
    EntryRef { target: EntryId, width: FixedWidth },
}

impl AttrValue {
    pub fn data(value: u64, width: FixedWidth) -> Self {
        Self::UInt {
            value,
            form: IntForm::Fixed(width),
        }
    }

    pub fn udata(value: u64) -> Self {
        Self::UInt {
            value,
            form: IntForm::Uleb,
        }
    }

    pub fn reference(target: EntryId, width: FixedWidth) -> Self {
        Self::EntryRef { target, width }
    }

    pub fn form(&self) -> Form {
        match *self {
            Self::UInt {
                form: IntForm::Fixed(width),
                ..
            } => width.data_form(),
            Self::UInt {
                form: IntForm::Uleb,
                ..
            } => Form::UDATA,
            Self::StringRef(_) => Form::STRP,
            Self::EntryRef { width, .. } => width.ref_form(),
        }
    }

    /// Encoded size in bytes.
    ///
    /// References contribute their fixed width whatever the target, so sizes
    /// are known before any offset is.
    pub fn encoded_size(&self) -> u64 {
        match *self {
            Self::UInt {
                form: IntForm::Fixed(width),
                ..
            } => u64::from(width.bytes()),
            Self::UInt {
                value,
                form: IntForm::Uleb,
            } => uleb128_len(value) as u64,
            Self::StringRef(_) => STRP_SIZE,
            Self::EntryRef { width, .. } => u64::from(width.bytes()),
        }
    }
}

/// An attribute attached to an entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Attribute {
    pub kind: AttrKind,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(kind: AttrKind, value: AttrValue) -> Self {
        Self { kind, value }
    }

    #[inline]
    pub fn form(&self) -> Form {
        self.value.form()
    }
}
