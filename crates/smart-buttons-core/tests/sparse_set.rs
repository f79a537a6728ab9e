//! Generational arena tests.
//!
//! Document nodes live in a `SparseSet`; these tests pin down the handle
//! semantics the document relies on when releasing transient nodes.

use smart_buttons_core::alloc::{IndexSlot, SparseSet};

#[test]
fn test_push_and_get() {
    let mut set = SparseSet::new();

    let idx = set.push(42);
    let idx2 = set.push(100);

    assert_eq!(set.get(idx), Some(&42));
    assert_eq!(set.get(idx2), Some(&100));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_get_mut() {
    let mut set = SparseSet::new();
    let idx = set.push(String::from("a"));

    if let Some(value) = set.get_mut(idx) {
        value.push('b');
    }

    assert_eq!(set.get(idx).map(String::as_str), Some("ab"));
}

#[test]
fn test_remove_invalidates_handle() {
    let mut set = SparseSet::new();
    let idx = set.push(1);

    assert!(set.contains(idx));
    assert_eq!(set.remove(idx), Some(1));
    assert!(!set.contains(idx));
    assert!(set.get_mut(idx).is_none());
    assert!(set.is_empty());
}

#[test]
fn test_iter_skips_removed() {
    let mut set = SparseSet::new();
    let slots: Vec<IndexSlot> = (0..10).map(|i| set.push(i)).collect();

    set.remove(slots[0]);
    set.remove(slots[5]);

    let values: Vec<i32> = set.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 6, 7, 8, 9]);

    for (slot, value) in set.iter() {
        assert_eq!(set.get(slot), Some(value));
    }
}

#[test]
fn test_out_of_range_slot() {
    let set = SparseSet::<u8>::new();
    assert_eq!(set.get(IndexSlot::new(0, 7)), None);
}
