//! Unit tests for StringPool.

use crate::error::ConstructionError;
use crate::string_pool::StringPool;
use crate::value::StrOffset;

#[test]
fn add_is_idempotent() {
    let mut pool = StringPool::new();

    let first = pool.add("warpo").unwrap();
    let size_after_first = pool.size();
    let second = pool.add("warpo").unwrap();

    assert_eq!(first, second);
    assert_eq!(pool.size(), size_after_first);
    assert_eq!(pool.len(), 1);
}

#[test]
fn offsets_follow_first_seen_order() {
    let mut pool = StringPool::new();

    let warpo = pool.add("warpo").unwrap();
    let int = pool.add("int").unwrap();
    let char_ = pool.add("char").unwrap();
    pool.add("int").unwrap();

    assert_eq!(warpo, StrOffset(0));
    assert_eq!(int, StrOffset(6));
    assert_eq!(char_, StrOffset(10));
    assert_eq!(pool.as_bytes(), b"warpo\0int\0char\0");
}

#[test]
fn size_counts_unique_strings_only() {
    let mut pool = StringPool::new();
    for s in ["x", "y", "x", "name", "y", "name"] {
        pool.add(s).unwrap();
    }

    let expected: u32 = ["x", "y", "name"].iter().map(|s| s.len() as u32 + 1).sum();
    assert_eq!(pool.size(), expected);
}

#[test]
fn empty_string_takes_one_byte() {
    let mut pool = StringPool::new();

    let empty = pool.add("").unwrap();

    assert_eq!(empty, StrOffset(0));
    assert_eq!(pool.size(), 1);
    assert_eq!(pool.get(empty).unwrap(), "");
}

#[test]
fn get_reads_up_to_terminator() {
    let mut pool = StringPool::new();
    pool.add("MyClass").unwrap();
    let name = pool.add("name").unwrap();

    assert_eq!(pool.get(StrOffset(0)).unwrap(), "MyClass");
    assert_eq!(pool.get(name).unwrap(), "name");
    // Offsets inside a string see its suffix.
    assert_eq!(pool.get(StrOffset(2)).unwrap(), "Class");
}

#[test]
fn get_out_of_bounds_fails_loudly() {
    let mut pool = StringPool::new();
    pool.add("abc").unwrap();

    let err = pool.get(StrOffset(4)).unwrap_err();

    assert_eq!(
        err,
        ConstructionError::StringOutOfBounds {
            offset: StrOffset(4),
            size: 4,
        }
    );
    assert!(pool.check(StrOffset(3)).is_ok());
    assert!(pool.check(StrOffset(4)).is_err());
}

#[test]
fn get_in_middle_of_multibyte_char_is_rejected() {
    let mut pool = StringPool::new();
    pool.add("é").unwrap();

    assert_eq!(
        pool.get(StrOffset(1)),
        Err(ConstructionError::MalformedString(StrOffset(1)))
    );
}

#[test]
fn interior_nul_is_rejected() {
    let mut pool = StringPool::new();

    let err = pool.add("a\0b").unwrap_err();

    assert_eq!(err, ConstructionError::InteriorNul("a\0b".to_string()));
    assert!(pool.is_empty());
    assert_eq!(pool.size(), 0);
}

#[test]
fn iter_yields_offsets_in_order() {
    let mut pool = StringPool::new();
    pool.add("x").unwrap();
    pool.add("y").unwrap();
    pool.add("name").unwrap();

    let items: Vec<_> = pool.iter().collect();

    assert_eq!(
        items,
        vec![(StrOffset(0), "x"), (StrOffset(2), "y"), (StrOffset(4), "name")]
    );
    assert_eq!(pool.find("y"), Some(StrOffset(2)));
    assert_eq!(pool.find("z"), None);
}
