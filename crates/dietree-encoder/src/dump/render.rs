//! Text rendering of finalized debug information.

use std::fmt::Write as _;

use dietree_core::{AttrKind, Encoding, Language, dwarf::children_name};

use super::palette::{Palette, Role};
use crate::info::{DebugInfo, Die, ResolvedAttribute, ResolvedValue};

/// Rendering options.
#[derive(Clone, Copy, Debug)]
pub struct DumpOptions {
    pub(crate) palette: Palette,
    /// Append `[DW_FORM_*]` to attribute lines.
    pub(crate) show_forms: bool,
    /// Include the `.debug_abbrev` block.
    pub(crate) show_abbrevs: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            palette: Palette::PLAIN,
            show_forms: true,
            show_abbrevs: true,
        }
    }
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.palette = Palette::new(enabled);
        self
    }

    pub fn show_forms(mut self, value: bool) -> Self {
        self.show_forms = value;
        self
    }

    pub fn show_abbrevs(mut self, value: bool) -> Self {
        self.show_abbrevs = value;
        self
    }
}

/// Render `info` as text.
///
/// Sections appear as `.debug_abbrev`, `.debug_info`, `.debug_str`, each
/// introduced by a `<name> contents:` header so that `SectionFilter` can drop
/// them.
pub fn render(info: &DebugInfo, options: &DumpOptions) -> String {
    let mut out = String::new();

    render_banner(&mut out, info);
    if options.show_abbrevs {
        render_abbrevs(&mut out, info, options);
        out.push('\n');
    }
    render_section_header(&mut out, ".debug_info", options);
    render_entries(&mut out, info, options);
    out.push('\n');
    render_strings(&mut out, info, options);

    out
}

fn render_banner(out: &mut String, info: &DebugInfo) {
    writeln!(out, "=== DWARF Debug Information ===").unwrap();

    let root = info.root();
    if let Some(attr) = root.attribute(AttrKind::PRODUCER)
        && let ResolvedValue::Str(offset) = attr.value
        && let Ok(producer) = info.strings().get(offset)
    {
        writeln!(out, "Producer: {producer}").unwrap();
    }
    if let Some(attr) = root.attribute(AttrKind::LANGUAGE)
        && let ResolvedValue::UInt(value) = attr.value
    {
        let language = u16::try_from(value).ok().map(Language);
        match language.and_then(Language::display_name) {
            Some(name) => writeln!(out, "Language: {name}").unwrap(),
            None => writeln!(out, "Language: {value:#x}").unwrap(),
        }
    }
    out.push('\n');
}

fn render_section_header(out: &mut String, name: &str, options: &DumpOptions) {
    let header = format!("{name} contents:");
    writeln!(out, "{}", options.palette.paint(Role::Section, header)).unwrap();
}

fn render_abbrevs(out: &mut String, info: &DebugInfo, options: &DumpOptions) {
    let p = options.palette;
    render_section_header(out, ".debug_abbrev", options);

    for (code, shape) in info.abbrevs().iter() {
        writeln!(
            out,
            "{} {} {}",
            p.paint(Role::Detail, format_args!("[{code}]")),
            p.paint(Role::Tag, shape.tag),
            children_name(shape.has_children)
        )
        .unwrap();
        for (kind, form) in &shape.attributes {
            writeln!(out, "  {kind} {}", p.paint(Role::Detail, form)).unwrap();
        }
    }
}

/// Entries in pre-order, indented two spaces per level. A `NULL` line closes
/// each children list once the walk leaves its depth.
fn render_entries(out: &mut String, info: &DebugInfo, options: &DumpOptions) {
    // Depths of entries whose children list is still open.
    let mut open: Vec<usize> = Vec::new();

    for die in info.iter() {
        while let Some(&depth) = open.last()
            && depth >= die.depth()
        {
            open.pop();
            render_null(out, depth);
        }

        render_die(out, info, die, options);
        if die.has_children() {
            open.push(die.depth());
        }
    }

    while let Some(depth) = open.pop() {
        render_null(out, depth);
    }
}

fn render_null(out: &mut String, depth: usize) {
    writeln!(out, "{:pad$}NULL", "", pad = 2 * depth).unwrap();
}

fn render_die(out: &mut String, info: &DebugInfo, die: &Die, options: &DumpOptions) {
    let p = options.palette;
    let pad = 2 * die.depth();

    write!(
        out,
        "{:pad$}{}: {} {}",
        "",
        p.paint(Role::Offset, format_args!("0x{:08x}", die.offset())),
        p.paint(Role::Tag, die.tag()),
        p.paint(Role::Detail, format_args!("[{}]", die.abbrev())),
    )
    .unwrap();
    if die.has_children() {
        out.push_str(" *");
    }
    out.push('\n');

    for attr in die.attributes() {
        write!(out, "{:pad$}  {} = ", "", attr.kind).unwrap();
        render_value(out, info, attr, options);
        if options.show_forms {
            write!(out, " {}", p.paint(Role::Detail, format_args!("[{}]", attr.form))).unwrap();
        }
        out.push('\n');
    }
}

fn render_value(out: &mut String, info: &DebugInfo, attr: &ResolvedAttribute, options: &DumpOptions) {
    let p = options.palette;
    match attr.value {
        ResolvedValue::Str(offset) => {
            let text = info.strings().get(offset).unwrap_or("<invalid>");
            write!(
                out,
                "{} (strp offset: 0x{:08x})",
                p.paint(Role::Str, format_args!("\"{text}\"")),
                offset.get()
            )
            .unwrap();
        }
        ResolvedValue::Ref { offset, .. } => {
            write!(out, "{{0x{offset:08x}}}").unwrap();
        }
        ResolvedValue::UInt(value) => match symbolic_constant(attr.kind, value) {
            Some(name) => out.push_str(name),
            None => write!(out, "0x{value:x}").unwrap(),
        },
    }
}

/// Symbolic name for attributes whose values are enumerations.
fn symbolic_constant(kind: AttrKind, value: u64) -> Option<&'static str> {
    match kind {
        AttrKind::ENCODING => u8::try_from(value).ok().map(Encoding)?.name(),
        AttrKind::LANGUAGE => u16::try_from(value).ok().map(Language)?.name(),
        _ => None,
    }
}

fn render_strings(out: &mut String, info: &DebugInfo, options: &DumpOptions) {
    let p = options.palette;
    render_section_header(out, ".debug_str", options);
    for (offset, s) in info.strings().iter() {
        writeln!(
            out,
            "{}: {}",
            p.paint(Role::Offset, format_args!("0x{:08x}", offset.get())),
            p.paint(Role::Str, format_args!("\"{s}\""))
        )
        .unwrap();
    }
}
