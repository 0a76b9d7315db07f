//! Line-based removal of named sections from rendered dumps.
//!
//! The filter knows nothing about what produced the text. It watches for
//! section header lines (`.debug_<name> contents:`) and drops everything from
//! an omitted header up to, but not including, the next header.

/// Omits named sections from rendered output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionFilter {
    /// Section labels to drop, e.g. `.debug_line`.
    omit: Vec<String>,
}

impl SectionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the section labelled `label`.
    pub fn omit(mut self, label: impl Into<String>) -> Self {
        self.omit.push(label.into());
        self
    }

    pub fn omitted(&self) -> &[String] {
        &self.omit
    }

    pub fn is_empty(&self) -> bool {
        self.omit.is_empty()
    }

    /// Apply the filter to `text`.
    ///
    /// Lines are copied verbatim, terminators included, so a filter that
    /// matches nothing returns its input unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut omitting = false;

        for line in text.split_inclusive('\n') {
            if self.starts_omitted(line) {
                omitting = true;
                continue;
            }
            if omitting && is_section_header(line) {
                omitting = false;
            }
            if !omitting {
                out.push_str(line);
            }
        }

        out
    }

    fn starts_omitted(&self, line: &str) -> bool {
        self.omit
            .iter()
            .any(|label| line.contains(&format!("{label} contents:")))
    }
}

/// Whether `line` introduces a section.
pub fn is_section_header(line: &str) -> bool {
    line.contains(".debug_") && line.contains("contents:")
}
