use crate::error::{ConstructionError, ResolutionError};
use crate::test_utils::my_class_builder;
use crate::value::{AttrValue, EntryId, FixedWidth, StrOffset};
use crate::{AttrKind, DebugInfoBuilder, EncoderConfig, Form, Tag};

#[test]
fn attributes_keep_call_order() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::BASE_TYPE).unwrap();

    b.add_data(ty, AttrKind::BYTE_SIZE, 4, FixedWidth::One).unwrap();
    b.add_string(ty, AttrKind::NAME, "int").unwrap();
    b.add_udata(ty, AttrKind::ALIGNMENT, 4).unwrap();

    let kinds: Vec<_> = b.entry(ty).unwrap().attributes().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AttrKind::BYTE_SIZE, AttrKind::NAME, AttrKind::ALIGNMENT]);
}

#[test]
fn add_string_interns_once() {
    let mut b = DebugInfoBuilder::default();
    let x = b.new_entry(Tag::MEMBER).unwrap();
    let y = b.new_entry(Tag::MEMBER).unwrap();

    let first = b.add_string(x, AttrKind::NAME, "value").unwrap();
    let second = b.add_string(y, AttrKind::NAME, "value").unwrap();

    assert_eq!(first, second);
    assert_eq!(b.strings().len(), 1);
}

#[test]
fn fixed_width_overflow_is_rejected() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::BASE_TYPE).unwrap();

    let err = b
        .add_data(ty, AttrKind::BYTE_SIZE, 256, FixedWidth::One)
        .unwrap_err();

    assert_eq!(
        err,
        ConstructionError::ValueOverflow {
            entry: ty,
            kind: AttrKind::BYTE_SIZE,
            value: 256,
            width: 1,
        }
    );
    assert!(b.entry(ty).unwrap().attributes().is_empty());
}

#[test]
fn widest_values_fit() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::BASE_TYPE).unwrap();

    b.add_data(ty, AttrKind::BYTE_SIZE, 0xff, FixedWidth::One).unwrap();
    b.add_data(ty, AttrKind::ALIGNMENT, 0xffff, FixedWidth::Two).unwrap();
    b.add_data(ty, AttrKind::COUNT, u64::MAX, FixedWidth::Eight).unwrap();
    b.add_udata(ty, AttrKind::UPPER_BOUND, u64::MAX).unwrap();
}

#[test]
fn string_offset_outside_pool_is_rejected() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::BASE_TYPE).unwrap();
    b.intern("int").unwrap();

    let err = b
        .add_attribute(ty, AttrKind::NAME, AttrValue::StringRef(StrOffset(4)))
        .unwrap_err();

    assert_eq!(
        err,
        ConstructionError::StringOutOfBounds {
            offset: StrOffset(4),
            size: 4,
        }
    );
}

#[test]
fn add_form_accepts_data_forms() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::BASE_TYPE).unwrap();

    b.add_form(ty, AttrKind::BYTE_SIZE, Form::DATA1, 4).unwrap();
    b.add_form(ty, AttrKind::ALIGNMENT, Form::UDATA, 300).unwrap();

    let forms: Vec<_> = b.entry(ty).unwrap().attributes().iter().map(|a| a.form()).collect();
    assert_eq!(forms, vec![Form::DATA1, Form::UDATA]);
}

#[test]
fn add_form_rejects_variable_width_references() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::POINTER_TYPE).unwrap();

    let err = b
        .add_form(ty, AttrKind::TYPE, Form::REF_UDATA, 0)
        .unwrap_err();

    assert_eq!(
        err,
        ConstructionError::UnsupportedForm {
            entry: ty,
            kind: AttrKind::TYPE,
            form: Form::REF_UDATA,
        }
    );
}

#[test]
fn add_form_rejects_unknown_forms() {
    let mut b = DebugInfoBuilder::default();
    let ty = b.new_entry(Tag::BASE_TYPE).unwrap();

    assert!(matches!(
        b.add_form(ty, AttrKind::NAME, Form(0x7777), 1),
        Err(ConstructionError::UnsupportedForm { .. })
    ));
}

#[test]
fn unknown_entry_is_rejected() {
    let mut b = DebugInfoBuilder::default();
    let ghost = EntryId::from_raw(7);

    assert_eq!(
        b.add_data(ghost, AttrKind::BYTE_SIZE, 1, FixedWidth::One),
        Err(ConstructionError::UnknownEntry(ghost))
    );
    let parent = b.new_entry(Tag::COMPILE_UNIT).unwrap();
    assert_eq!(
        b.add_child(parent, ghost),
        Err(ConstructionError::UnknownEntry(ghost))
    );
}

#[test]
fn child_cannot_have_two_parents() {
    let mut b = DebugInfoBuilder::default();
    let first = b.new_entry(Tag::COMPILE_UNIT).unwrap();
    let second = b.new_entry(Tag::NAMESPACE).unwrap();
    let child = b.new_entry(Tag::BASE_TYPE).unwrap();

    b.add_child(first, child).unwrap();
    let err = b.add_child(second, child).unwrap_err();

    assert_eq!(
        err,
        ConstructionError::AlreadyAttached {
            child,
            parent: first,
        }
    );
    assert!(b.entry(second).unwrap().children().is_empty());
}

#[test]
fn ownership_cycles_are_rejected() {
    let mut b = DebugInfoBuilder::default();
    let outer = b.new_entry(Tag::NAMESPACE).unwrap();
    let inner = b.new_entry(Tag::NAMESPACE).unwrap();
    b.add_child(outer, inner).unwrap();

    assert_eq!(
        b.add_child(inner, outer),
        Err(ConstructionError::CyclicOwnership {
            parent: inner,
            child: outer,
        })
    );
    assert_eq!(
        b.add_child(inner, inner),
        Err(ConstructionError::CyclicOwnership {
            parent: inner,
            child: inner,
        })
    );
}

#[test]
fn references_may_precede_their_target() {
    let mut b = DebugInfoBuilder::default();
    let unit = b.new_entry(Tag::COMPILE_UNIT).unwrap();
    let ptr = b.new_entry(Tag::POINTER_TYPE).unwrap();
    b.add_child(unit, ptr).unwrap();

    // Target allocated but still empty and detached.
    let pointee = b.new_entry(Tag::STRUCTURE_TYPE).unwrap();
    b.add_reference(ptr, AttrKind::TYPE, pointee).unwrap();

    b.add_string(pointee, AttrKind::NAME, "Later").unwrap();
    b.add_child(unit, pointee).unwrap();

    let info = b.finalize(unit).unwrap();
    assert!(info.offset_of(pointee).unwrap() > info.offset_of(ptr).unwrap());
}

#[test]
fn reference_uses_configured_width() {
    let config = EncoderConfig::new().ref_width(FixedWidth::Two);
    let mut b = DebugInfoBuilder::new(config);
    let unit = b.new_entry(Tag::COMPILE_UNIT).unwrap();

    b.add_reference(unit, AttrKind::SPECIFICATION, unit).unwrap();

    assert_eq!(b.entry(unit).unwrap().attributes()[0].form(), Form::REF2);
}

#[test]
fn offsets_are_unavailable_before_finalize() {
    let (b, ids) = my_class_builder(EncoderConfig::default());

    assert_eq!(
        b.offset_of(ids.int),
        Err(ResolutionError::NotFinalized(ids.int))
    );
}

#[test]
fn root_must_be_known_and_parentless() {
    let (b, ids) = my_class_builder(EncoderConfig::default());
    assert_eq!(
        b.clone().finalize(ids.class).unwrap_err(),
        ResolutionError::InvalidRoot(ids.class)
    );

    let ghost = EntryId::from_raw(999);
    assert_eq!(
        b.finalize(ghost).unwrap_err(),
        ResolutionError::InvalidRoot(ghost)
    );
}

#[test]
fn invalid_ref_width() {
    assert_eq!(
        FixedWidth::from_bytes(3),
        Err(ConstructionError::InvalidRefWidth(3))
    );
    assert_eq!(FixedWidth::from_bytes(8), Ok(FixedWidth::Eight));
}

#[test]
fn entry_ids_stop_at_u32_max() {
    let last = u32::MAX as usize;

    assert_eq!(EntryId::try_new(last), Some(EntryId::from_raw(u32::MAX)));
    assert_eq!(EntryId::try_new(last + 1), None);
}

#[test]
fn arena_overflow_message() {
    let err = ConstructionError::TooManyEntries(u32::MAX as usize + 1);

    assert_eq!(err.to_string(), "entry arena is full (4294967296 entries)");
}
