//! Shared fixtures for encoder tests.

use crate::{
    AttrKind, DebugInfo, DebugInfoBuilder, EncoderConfig, Encoding, EntryId, FixedWidth, Language,
    Tag,
};

/// Handles into the `MyClass` fixture.
#[derive(Clone, Copy, Debug)]
pub struct MyClassIds {
    pub unit: EntryId,
    pub int: EntryId,
    pub char_: EntryId,
    pub char_ptr: EntryId,
    pub class: EntryId,
    pub x: EntryId,
    pub y: EntryId,
    pub name: EntryId,
}

/// Compile unit produced by "warpo" describing
/// `struct MyClass { int x; int y; char *name; }`.
pub fn my_class_builder(config: EncoderConfig) -> (DebugInfoBuilder, MyClassIds) {
    let mut b = DebugInfoBuilder::new(config);

    let unit = b.new_entry(Tag::COMPILE_UNIT).unwrap();
    b.add_string(unit, AttrKind::PRODUCER, "warpo").unwrap();
    b.add_data(
        unit,
        AttrKind::LANGUAGE,
        u64::from(Language::C_PLUS_PLUS.get()),
        FixedWidth::Two,
    )
    .unwrap();

    let int = base_type(&mut b, unit, "int", Encoding::SIGNED, 4);
    let char_ = base_type(&mut b, unit, "char", Encoding::SIGNED_CHAR, 1);

    let char_ptr = b.new_entry(Tag::POINTER_TYPE).unwrap();
    b.add_data(char_ptr, AttrKind::BYTE_SIZE, 8, FixedWidth::One).unwrap();
    b.add_reference(char_ptr, AttrKind::TYPE, char_).unwrap();
    b.add_child(unit, char_ptr).unwrap();

    let class = b.new_entry(Tag::STRUCTURE_TYPE).unwrap();
    b.add_string(class, AttrKind::NAME, "MyClass").unwrap();
    b.add_data(class, AttrKind::BYTE_SIZE, 24, FixedWidth::One).unwrap();
    b.add_child(unit, class).unwrap();

    let x = member(&mut b, class, "x", int, 0);
    let y = member(&mut b, class, "y", int, 4);
    let name = member(&mut b, class, "name", char_ptr, 8);

    let ids = MyClassIds {
        unit,
        int,
        char_,
        char_ptr,
        class,
        x,
        y,
        name,
    };
    (b, ids)
}

pub fn my_class_unit(config: EncoderConfig) -> (DebugInfo, MyClassIds) {
    let (b, ids) = my_class_builder(config);
    let info = b.finalize(ids.unit).expect("fixture must finalize");
    (info, ids)
}

fn base_type(
    b: &mut DebugInfoBuilder,
    parent: EntryId,
    name: &str,
    encoding: Encoding,
    byte_size: u64,
) -> EntryId {
    let id = b.new_entry(Tag::BASE_TYPE).unwrap();
    b.add_string(id, AttrKind::NAME, name).unwrap();
    b.add_data(id, AttrKind::ENCODING, u64::from(encoding.get()), FixedWidth::One)
        .unwrap();
    b.add_data(id, AttrKind::BYTE_SIZE, byte_size, FixedWidth::One)
        .unwrap();
    b.add_child(parent, id).unwrap();
    id
}

fn member(
    b: &mut DebugInfoBuilder,
    parent: EntryId,
    name: &str,
    ty: EntryId,
    location: u64,
) -> EntryId {
    let id = b.new_entry(Tag::MEMBER).unwrap();
    b.add_string(id, AttrKind::NAME, name).unwrap();
    b.add_reference(id, AttrKind::TYPE, ty).unwrap();
    b.add_data(id, AttrKind::DATA_MEMBER_LOCATION, location, FixedWidth::One)
        .unwrap();
    b.add_child(parent, id).unwrap();
    id
}

/// Chain of `depth + 1` attribute-less namespaces laid out from offset 0.
///
/// Built leaf first so each `add_child` sees a parentless parent.
pub fn namespace_chain(depth: usize) -> DebugInfo {
    let mut b = DebugInfoBuilder::new(EncoderConfig::new().base_offset(0));
    let mut top = b.new_entry(Tag::NAMESPACE).unwrap();
    for _ in 0..depth {
        let parent = b.new_entry(Tag::NAMESPACE).unwrap();
        b.add_child(parent, top).unwrap();
        top = parent;
    }
    b.finalize(top).expect("chain must finalize")
}
