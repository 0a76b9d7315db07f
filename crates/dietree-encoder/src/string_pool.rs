//! String pool backing `DW_FORM_strp` attributes.
//!
//! Strings are stored once each, NUL-terminated, in first-seen order. An
//! offset handed out never changes, so attributes can point into the pool
//! while it is still growing.

use indexmap::IndexMap;

use crate::error::ConstructionError;
use crate::value::StrOffset;

/// Deduplicating string pool, the contents of `.debug_str`.
#[derive(Debug, Clone, Default)]
pub struct StringPool {
    /// Interned strings in insertion (and therefore offset) order.
    lookup: IndexMap<String, StrOffset>,
    /// Concatenated strings, each followed by a NUL.
    data: Vec<u8>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its offset.
    ///
    /// Adding a string already in the pool returns the existing offset and
    /// leaves the blob untouched.
    pub fn add(&mut self, s: &str) -> Result<StrOffset, ConstructionError> {
        if let Some(&offset) = self.lookup.get(s) {
            return Ok(offset);
        }
        if s.as_bytes().contains(&0) {
            return Err(ConstructionError::InteriorNul(s.to_owned()));
        }

        let end = self.data.len() + s.len() + 1;
        if end > u32::MAX as usize {
            return Err(ConstructionError::PoolOverflow);
        }

        let offset = StrOffset(self.data.len() as u32);
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(0);
        self.lookup.insert(s.to_owned(), offset);
        Ok(offset)
    }

    /// Offset of a string, if it was interned.
    pub fn find(&self, s: &str) -> Option<StrOffset> {
        self.lookup.get(s).copied()
    }

    /// Read the NUL-terminated string starting at `offset`.
    ///
    /// An offset inside a string yields its suffix, as a consumer reading
    /// `.debug_str` would see it.
    pub fn get(&self, offset: StrOffset) -> Result<&str, ConstructionError> {
        let start = offset.get() as usize;
        if start >= self.data.len() {
            return Err(ConstructionError::StringOutOfBounds {
                offset,
                size: self.size(),
            });
        }

        let tail = &self.data[start..];
        let len = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        std::str::from_utf8(&tail[..len]).map_err(|_| ConstructionError::MalformedString(offset))
    }

    /// Check that `offset` points inside the blob.
    pub fn check(&self, offset: StrOffset) -> Result<(), ConstructionError> {
        if offset.get() < self.size() {
            Ok(())
        } else {
            Err(ConstructionError::StringOutOfBounds {
                offset,
                size: self.size(),
            })
        }
    }

    /// Number of distinct strings.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Blob size in bytes, terminators included.
    pub fn size(&self) -> u32 {
        self.data.len() as u32
    }

    /// Iterate over `(offset, string)` in offset order.
    pub fn iter(&self) -> impl Iterator<Item = (StrOffset, &str)> {
        self.lookup.iter().map(|(s, &offset)| (offset, s.as_str()))
    }

    /// The raw `.debug_str` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
