//! The reference compile unit: `struct MyClass { int x; int y; char *name; }`
//! produced by "warpo".

use dietree_core::{AttrKind, Encoding, Language, Tag};
use dietree_encoder::{DebugInfo, DebugInfoBuilder, EncoderConfig, EntryId, FixedWidth};

use super::CommandError;

pub fn build(config: EncoderConfig) -> Result<DebugInfo, CommandError> {
    let mut b = DebugInfoBuilder::new(config);

    let unit = b.new_entry(Tag::COMPILE_UNIT)?;
    b.add_string(unit, AttrKind::PRODUCER, "warpo")?;
    b.add_data(
        unit,
        AttrKind::LANGUAGE,
        u64::from(Language::C_PLUS_PLUS.get()),
        FixedWidth::Two,
    )?;

    let int = base_type(&mut b, unit, "int", Encoding::SIGNED, 4)?;
    let char_ = base_type(&mut b, unit, "char", Encoding::SIGNED_CHAR, 1)?;

    let char_ptr = b.new_entry(Tag::POINTER_TYPE)?;
    b.add_data(char_ptr, AttrKind::BYTE_SIZE, 8, FixedWidth::One)?;
    b.add_reference(char_ptr, AttrKind::TYPE, char_)?;
    b.add_child(unit, char_ptr)?;

    let class = b.new_entry(Tag::STRUCTURE_TYPE)?;
    b.add_string(class, AttrKind::NAME, "MyClass")?;
    b.add_data(class, AttrKind::BYTE_SIZE, 24, FixedWidth::One)?;
    b.add_child(unit, class)?;

    member(&mut b, class, "x", int, 0)?;
    member(&mut b, class, "y", int, 4)?;
    member(&mut b, class, "name", char_ptr, 8)?;

    Ok(b.finalize(unit)?)
}

fn base_type(
    b: &mut DebugInfoBuilder,
    parent: EntryId,
    name: &str,
    encoding: Encoding,
    byte_size: u64,
) -> Result<EntryId, CommandError> {
    let id = b.new_entry(Tag::BASE_TYPE)?;
    b.add_string(id, AttrKind::NAME, name)?;
    b.add_data(id, AttrKind::ENCODING, u64::from(encoding.get()), FixedWidth::One)?;
    b.add_data(id, AttrKind::BYTE_SIZE, byte_size, FixedWidth::One)?;
    b.add_child(parent, id)?;
    Ok(id)
}

fn member(
    b: &mut DebugInfoBuilder,
    parent: EntryId,
    name: &str,
    ty: EntryId,
    location: u64,
) -> Result<EntryId, CommandError> {
    let id = b.new_entry(Tag::MEMBER)?;
    b.add_string(id, AttrKind::NAME, name)?;
    b.add_reference(id, AttrKind::TYPE, ty)?;
    b.add_data(id, AttrKind::DATA_MEMBER_LOCATION, location, FixedWidth::One)?;
    b.add_child(parent, id)?;
    Ok(id)
}
