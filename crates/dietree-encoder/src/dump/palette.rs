//! ANSI colors for dumps, chosen by what a span of text is.
//!
//! Only standard 16-color codes are used so dumps read on light and dark
//! terminals alike.

use std::fmt;

const RESET: &str = "\x1b[0m";

/// What a painted span is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// `<name> contents:` lines.
    Section,
    /// `DW_TAG_*` names.
    Tag,
    /// String pool contents.
    Str,
    /// Entry and string offsets.
    Offset,
    /// Forms and abbreviation codes.
    Detail,
}

impl Role {
    fn code(self) -> &'static str {
        match self {
            Role::Section => "\x1b[1;34m",
            Role::Tag => "\x1b[34m",
            Role::Str => "\x1b[32m",
            Role::Offset => "\x1b[33m",
            Role::Detail => "\x1b[2m",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const PLAIN: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn paint<T: fmt::Display>(self, role: Role, value: T) -> Painted<T> {
        Painted {
            value,
            code: self.enabled.then(|| role.code()),
        }
    }
}

/// A value that displays wrapped in its role's escape codes.
pub struct Painted<T> {
    value: T,
    code: Option<&'static str>,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code}{}{RESET}", self.value),
            None => self.value.fmt(f),
        }
    }
}
