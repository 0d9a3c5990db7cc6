//! Integration tests for the public API.
//!
//! These tests drive arrays and iterators together the way a caller would,
//! through the crate root only.

use keel_core::{Array, Cursor, ErrorKind, Iter, Join, array};
use pretty_assertions::assert_eq;

#[test]
fn test_negative_indexing() {
    let values = array![0, 1, 2, 3];
    assert_eq!(values[-1], 3);
    assert_eq!(values[-2], 2);
    assert_eq!(values[-4], 0);

    let error = values.at(-5).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::TooNegativeIndex);
}

#[test]
fn test_growing_write() {
    let mut values = Array::<i32>::new();
    *values.at_mut(3).unwrap() = 5;
    assert_eq!(values.count(), 4);
    assert_eq!(values, array![0, 0, 0, 5]);
}

#[test]
fn test_fixed_count_assignment_truncates() {
    let mut fixed = Array::<i32>::fixed_length(3);
    let source = array![1, 2, 3, 4, 5];
    fixed.assign_from(&source);

    assert_eq!(fixed, array![1, 2, 3]);
    assert!(fixed.is_locked());
    assert_eq!(source.count(), 5);
    assert_eq!(fixed.append(0).unwrap_err().kind(), ErrorKind::FixedCountMismatch);
}

#[test]
fn test_swap_indices_order_independent() {
    let mut a = array![1, 2, 3];
    a.reserve(6).unwrap();
    let mut b = a.clone();
    a.swap_indices(4, -1).unwrap();
    b.swap_indices(-1, 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_pull_after_exhaustion() {
    let mut iter = Iter::range(2_u8);
    assert_eq!(iter.pull(), Some(0));
    assert_eq!(iter.pull(), Some(1));
    assert_eq!(iter.pull(), None);
    assert_eq!(iter.pull(), None);
}

#[test]
fn test_filter_map_pipeline() {
    let negated: Array<i32> = Iter::range(100_i32)
        .into_iterate(|i| (i % 30 == 0).then_some(-i))
        .into();
    assert_eq!(negated, array![0, -30, -60, -90]);
}

#[test]
fn test_range_into_array_and_back() {
    let values: Array<i32> = Iter::range(5_i32).into();
    let pulled: Array<i32> = values.values().into();
    assert_eq!(pulled, array![0, 1, 2, 3, 4]);
}

#[test]
fn test_erase_is_truncated_to_available() {
    let mut values: Array<i32> = Iter::range(100_i32).into();
    values.erase_n(5, 90).unwrap();
    assert_eq!(values.count(), 10);
}

#[test]
fn test_remove_all_matches() {
    let mut values = array![5, 3, 5, 5, 5, 5, 2, 1, 5];
    assert_eq!(values.remove(&5).unwrap(), 6);
    assert_eq!(values, array![3, 2, 1]);
}

#[test]
fn test_borrowing_child_then_parent() {
    let mut parent = Iter::range(16_i32);
    let firsts: Array<i32> = {
        let mut child = parent.iterate(|i| (i % 3 == 0).then_some(i));
        let mut firsts = Array::new();
        for _ in 0..4 {
            if let Some(value) = child.pull() {
                firsts.append(value).unwrap();
            }
        }
        firsts
    };
    assert_eq!(firsts, array![0, 3, 6, 9]);

    let rest: Array<i32> = parent.into();
    assert_eq!(rest, array![10, 11, 12, 13, 14, 15]);
}

#[test]
fn test_pipeline_over_array_values() {
    let words = array!["keel", "hull", "mast", "helm"];
    let joined = words
        .values()
        .into_iterate(|word| word.starts_with('h').then(|| word.to_uppercase()))
        .join(", ");
    assert_eq!(joined, "HULL, HELM");
    assert_eq!(", ".join(Iter::<u8>::empty()), "");
}

#[test]
fn test_cursor_loop_writes_through() {
    let mut values = array![1, 2, 3];
    let mut total = 0;
    {
        let mut iter = values.values_mut();
        let mut cursor = iter.cursor();
        while cursor != Cursor::end() {
            if let Some(value) = cursor.current_mut() {
                **value *= 2;
                total += **value;
            }
            cursor.advance();
        }
    }
    assert_eq!(total, 12);
    assert_eq!(values, array![2, 4, 6]);
}

#[test]
fn test_views_and_locators_do_not_resize() {
    let mut values = array![1, 2, 3];
    values.lock();

    let mut view = values.view();
    assert_eq!(*view.shift_view().unwrap(), 1);
    assert_eq!(*view.pop_view().unwrap(), 3);

    let past = values.get(3).unwrap();
    assert!(past.is_null());
    assert_eq!(*past.otherwise(&0), 0);
    assert_eq!(values.count(), 3);
}

#[test]
fn test_error_display() {
    let mut values = Array::<u8>::new();
    let error = values.pop().unwrap_err();
    let message = error.to_string();
    assert!(message.starts_with("array cannot pop due to insufficient count at "));
    assert!(message.contains("public_api.rs"));
}
