//! DWARF vocabulary: tags, attribute kinds, forms, base-type encodings and
//! source languages.
//!
//! Each kind is a transparent newtype over its on-disk integer so unknown
//! values survive a round trip; known values carry their `DW_*` name.

macro_rules! dwarf_constants {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty), unknown = $unknown:literal {
            $( $cname:ident = $value:literal => $text:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[repr(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            $( pub const $cname: Self = Self($value); )*

            /// Raw on-disk value.
            #[inline]
            pub fn get(self) -> $repr {
                self.0
            }

            /// Symbolic `DW_*` name, if the value is a known constant.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some($text), )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => f.write_str(name),
                    None => write!(f, "{}_{:#x}", $unknown, self.0),
                }
            }
        }
    };
}

// ============================================================================
// Tags
// ============================================================================

dwarf_constants! {
    /// Structural kind of a debugging information entry (`DW_TAG_*`).
    pub struct Tag(u16), unknown = "DW_TAG_unknown" {
        ARRAY_TYPE = 0x01 => "DW_TAG_array_type",
        CLASS_TYPE = 0x02 => "DW_TAG_class_type",
        ENUMERATION_TYPE = 0x04 => "DW_TAG_enumeration_type",
        FORMAL_PARAMETER = 0x05 => "DW_TAG_formal_parameter",
        MEMBER = 0x0d => "DW_TAG_member",
        POINTER_TYPE = 0x0f => "DW_TAG_pointer_type",
        REFERENCE_TYPE = 0x10 => "DW_TAG_reference_type",
        COMPILE_UNIT = 0x11 => "DW_TAG_compile_unit",
        STRUCTURE_TYPE = 0x13 => "DW_TAG_structure_type",
        SUBROUTINE_TYPE = 0x15 => "DW_TAG_subroutine_type",
        TYPEDEF = 0x16 => "DW_TAG_typedef",
        UNION_TYPE = 0x17 => "DW_TAG_union_type",
        INHERITANCE = 0x1c => "DW_TAG_inheritance",
        SUBRANGE_TYPE = 0x21 => "DW_TAG_subrange_type",
        BASE_TYPE = 0x24 => "DW_TAG_base_type",
        CONST_TYPE = 0x26 => "DW_TAG_const_type",
        ENUMERATOR = 0x28 => "DW_TAG_enumerator",
        SUBPROGRAM = 0x2e => "DW_TAG_subprogram",
        VARIABLE = 0x34 => "DW_TAG_variable",
        VOLATILE_TYPE = 0x35 => "DW_TAG_volatile_type",
        NAMESPACE = 0x39 => "DW_TAG_namespace",
        UNSPECIFIED_TYPE = 0x3b => "DW_TAG_unspecified_type",
    }
}

// ============================================================================
// Attributes
// ============================================================================

dwarf_constants! {
    /// Attribute kind (`DW_AT_*`).
    pub struct AttrKind(u16), unknown = "DW_AT_unknown" {
        SIBLING = 0x01 => "DW_AT_sibling",
        LOCATION = 0x02 => "DW_AT_location",
        NAME = 0x03 => "DW_AT_name",
        BYTE_SIZE = 0x0b => "DW_AT_byte_size",
        STMT_LIST = 0x10 => "DW_AT_stmt_list",
        LOW_PC = 0x11 => "DW_AT_low_pc",
        HIGH_PC = 0x12 => "DW_AT_high_pc",
        LANGUAGE = 0x13 => "DW_AT_language",
        COMP_DIR = 0x1b => "DW_AT_comp_dir",
        CONST_VALUE = 0x1c => "DW_AT_const_value",
        INLINE = 0x20 => "DW_AT_inline",
        PRODUCER = 0x25 => "DW_AT_producer",
        PROTOTYPED = 0x27 => "DW_AT_prototyped",
        UPPER_BOUND = 0x2f => "DW_AT_upper_bound",
        ABSTRACT_ORIGIN = 0x31 => "DW_AT_abstract_origin",
        ACCESSIBILITY = 0x32 => "DW_AT_accessibility",
        COUNT = 0x37 => "DW_AT_count",
        DATA_MEMBER_LOCATION = 0x38 => "DW_AT_data_member_location",
        DECL_FILE = 0x3a => "DW_AT_decl_file",
        DECL_LINE = 0x3b => "DW_AT_decl_line",
        DECLARATION = 0x3c => "DW_AT_declaration",
        ENCODING = 0x3e => "DW_AT_encoding",
        EXTERNAL = 0x3f => "DW_AT_external",
        FRAME_BASE = 0x40 => "DW_AT_frame_base",
        SPECIFICATION = 0x47 => "DW_AT_specification",
        TYPE = 0x49 => "DW_AT_type",
        DATA_BIT_OFFSET = 0x6b => "DW_AT_data_bit_offset",
        ALIGNMENT = 0x88 => "DW_AT_alignment",
    }
}

// ============================================================================
// Forms
// ============================================================================

dwarf_constants! {
    /// Attribute value encoding (`DW_FORM_*`).
    pub struct Form(u16), unknown = "DW_FORM_unknown" {
        ADDR = 0x01 => "DW_FORM_addr",
        BLOCK2 = 0x03 => "DW_FORM_block2",
        BLOCK4 = 0x04 => "DW_FORM_block4",
        DATA2 = 0x05 => "DW_FORM_data2",
        DATA4 = 0x06 => "DW_FORM_data4",
        DATA8 = 0x07 => "DW_FORM_data8",
        STRING = 0x08 => "DW_FORM_string",
        BLOCK = 0x09 => "DW_FORM_block",
        BLOCK1 = 0x0a => "DW_FORM_block1",
        DATA1 = 0x0b => "DW_FORM_data1",
        FLAG = 0x0c => "DW_FORM_flag",
        SDATA = 0x0d => "DW_FORM_sdata",
        STRP = 0x0e => "DW_FORM_strp",
        UDATA = 0x0f => "DW_FORM_udata",
        REF_ADDR = 0x10 => "DW_FORM_ref_addr",
        REF1 = 0x11 => "DW_FORM_ref1",
        REF2 = 0x12 => "DW_FORM_ref2",
        REF4 = 0x13 => "DW_FORM_ref4",
        REF8 = 0x14 => "DW_FORM_ref8",
        REF_UDATA = 0x15 => "DW_FORM_ref_udata",
        INDIRECT = 0x16 => "DW_FORM_indirect",
        SEC_OFFSET = 0x17 => "DW_FORM_sec_offset",
        EXPRLOC = 0x18 => "DW_FORM_exprloc",
        FLAG_PRESENT = 0x19 => "DW_FORM_flag_present",
        REF_SIG8 = 0x20 => "DW_FORM_ref_sig8",
    }
}

impl Form {
    /// Encoded size in bytes for forms whose width does not depend on the value.
    ///
    /// Assumes DWARF32 (`strp` and `sec_offset` are 4 bytes).
    pub fn fixed_size(self) -> Option<u8> {
        match self {
            Self::DATA1 | Self::REF1 | Self::FLAG => Some(1),
            Self::DATA2 | Self::REF2 => Some(2),
            Self::DATA4 | Self::REF4 | Self::STRP | Self::SEC_OFFSET => Some(4),
            Self::DATA8 | Self::REF8 | Self::REF_SIG8 => Some(8),
            Self::FLAG_PRESENT => Some(0),
            _ => None,
        }
    }
}

// ============================================================================
// Base type encodings
// ============================================================================

dwarf_constants! {
    /// Base type encoding (`DW_ATE_*`), the value of `DW_AT_encoding`.
    pub struct Encoding(u8), unknown = "DW_ATE_unknown" {
        ADDRESS = 0x01 => "DW_ATE_address",
        BOOLEAN = 0x02 => "DW_ATE_boolean",
        COMPLEX_FLOAT = 0x03 => "DW_ATE_complex_float",
        FLOAT = 0x04 => "DW_ATE_float",
        SIGNED = 0x05 => "DW_ATE_signed",
        SIGNED_CHAR = 0x06 => "DW_ATE_signed_char",
        UNSIGNED = 0x07 => "DW_ATE_unsigned",
        UNSIGNED_CHAR = 0x08 => "DW_ATE_unsigned_char",
        UTF = 0x10 => "DW_ATE_UTF",
    }
}

// ============================================================================
// Languages
// ============================================================================

dwarf_constants! {
    /// Source language (`DW_LANG_*`), the value of `DW_AT_language`.
    pub struct Language(u16), unknown = "DW_LANG_unknown" {
        C89 = 0x0001 => "DW_LANG_C89",
        C = 0x0002 => "DW_LANG_C",
        C_PLUS_PLUS = 0x0004 => "DW_LANG_C_plus_plus",
        JAVA = 0x000b => "DW_LANG_Java",
        C99 = 0x000c => "DW_LANG_C99",
        OBJC = 0x0010 => "DW_LANG_ObjC",
        C_PLUS_PLUS_11 = 0x001a => "DW_LANG_C_plus_plus_11",
        RUST = 0x001c => "DW_LANG_Rust",
        C11 = 0x001d => "DW_LANG_C11",
        C_PLUS_PLUS_14 = 0x0021 => "DW_LANG_C_plus_plus_14",
    }
}

impl Language {
    /// Human-facing language name, as shown in dump banners.
    pub fn display_name(self) -> Option<&'static str> {
        let name = match self {
            Self::C89 => "C89",
            Self::C => "C",
            Self::C_PLUS_PLUS => "C++",
            Self::JAVA => "Java",
            Self::C99 => "C99",
            Self::OBJC => "Objective-C",
            Self::C_PLUS_PLUS_11 => "C++11",
            Self::RUST => "Rust",
            Self::C11 => "C11",
            Self::C_PLUS_PLUS_14 => "C++14",
            _ => return None,
        };
        Some(name)
    }
}

/// `DW_CHILDREN_no`: the entry is not followed by a children list.
pub const CHILDREN_NO: u8 = 0;
/// `DW_CHILDREN_yes`: the entry's children follow it, closed by a null entry.
pub const CHILDREN_YES: u8 = 1;

/// Name of a `DW_CHILDREN_*` flag.
pub fn children_name(has_children: bool) -> &'static str {
    if has_children {
        "DW_CHILDREN_yes"
    } else {
        "DW_CHILDREN_no"
    }
}
