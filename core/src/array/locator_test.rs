use crate::error::ErrorKind;
use crate::{Array, Element, ElementRef, String, array};

#[test]
fn test_get_within_range() {
    let array = array![10, 20, 30];
    let locator = array.get(-1).unwrap();
    assert!(!locator.is_null());
    assert_eq!(locator.index(), 2);
    assert_eq!(*locator.value().unwrap(), 30);
}

#[test]
fn test_get_past_end_is_null_without_growing() {
    let empty = Array::<i32>::new();
    let locator = empty.get(5).unwrap();
    assert!(locator.is_null());
    assert_eq!(locator.value().unwrap_err().kind(), ErrorKind::FixedCountMismatch);
    assert_eq!(empty.count(), 0);
}

#[test]
fn test_get_too_negative_fails() {
    let array = array![1];
    assert_eq!(array.get(-2).unwrap_err().kind(), ErrorKind::TooNegativeIndex);
}

#[test]
fn test_null_locator() {
    let locator = ElementRef::<u8>::null();
    assert!(locator.is_null());
    assert_eq!(locator.value().unwrap_err().kind(), ErrorKind::NullHandleAccess);
    assert_eq!(*locator.otherwise(&7), 7);
    assert_eq!(locator.or_default(), 0);
}

#[test]
fn test_first() {
    let array = array!["a", "b"];
    assert_eq!(*array.first().value().unwrap(), "a");
    assert!(Array::<&str>::new().first().is_null());
}

#[test]
fn test_otherwise_does_not_touch_array() {
    let array = array![1, 2];
    let past = array.get(4).unwrap();
    assert_eq!(*past.otherwise(&-1), -1);
    assert_eq!(array.get(1).unwrap().or_default(), 2);
    assert_eq!(array.count(), 2);
}

#[test]
fn test_element() {
    let array = array!['x', 'y'];
    let element = array.get(1).unwrap().element().unwrap();
    assert_eq!(
        element,
        Element {
            index: 1,
            value: &'y'
        }
    );
}

#[test]
fn test_shared_values_outlive_locator() {
    let array = array![String::from("a"), String::from("b")];
    let first = array.first().value().unwrap();
    let last = array.get(-1).unwrap().otherwise(first);
    assert_eq!(first, "a");
    assert_eq!(last, "b");

    let fallback = String::from("z");
    let missing = array.get(5).unwrap().otherwise(&fallback);
    assert_eq!(missing, "z");
}

#[test]
fn test_mut_locator_reads() {
    let mut array = array![1, 2];
    let mut locator = array.get_mut(1).unwrap();
    assert_eq!(*locator.value().unwrap(), 2);
    assert_eq!(locator.element().unwrap().index, 1);
    assert!(!locator.advance());
    assert_eq!(*locator.otherwise(&0), 0);
    assert_eq!(locator.value().unwrap_err().kind(), ErrorKind::NullHandleAccess);
}

#[test]
fn test_value_mut_grows() {
    let mut array = array![1];
    let mut locator = array.get_mut(3).unwrap();
    assert!(locator.is_null());
    *locator.value_mut().unwrap() = 4;
    assert!(!locator.is_null());
    assert_eq!(array, array![1, 0, 0, 4]);
}

#[test]
fn test_value_mut_on_fixed_count_fails() {
    let mut array = Array::<i32>::fixed_length(1);
    let mut locator = array.get_mut(1).unwrap();
    assert_eq!(locator.value_mut().unwrap_err().kind(), ErrorKind::FixedCountMismatch);
}

#[test]
fn test_pop_through_locator() {
    let mut array = array![1, 2, 3];
    let mut locator = array.get_mut(1).unwrap();
    assert_eq!(locator.pop().unwrap(), 2);
    assert_eq!(array, array![1, 3]);
}

#[test]
fn test_pop_through_null_locator_fails() {
    let mut array = array![1];
    let mut past = array.get_mut(1).unwrap();
    assert_eq!(past.pop().unwrap_err().kind(), ErrorKind::NullHandleAccess);

    let mut empty = Array::<u8>::new();
    let error = empty.first_mut().pop().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NullHandleAccess);
}

#[test]
fn test_pop_through_locator_on_fixed_count_fails() {
    let mut array = array![1, 2];
    array.lock();
    let mut locator = array.get_mut(0).unwrap();
    assert_eq!(locator.pop().unwrap_err().kind(), ErrorKind::FixedCountMismatch);
}

#[test]
fn test_advance_nulls_past_end() {
    let array = array![1, 2, 3];
    let mut locator = array.first();
    let mut seen = vec![*locator.value().unwrap()];
    while locator.advance() {
        seen.push(*locator.value().unwrap());
    }
    assert_eq!(seen, [1, 2, 3]);
    assert!(locator.is_null());
    assert!(!locator.advance());
}

#[test]
fn test_retreat_nulls_below_zero() {
    let array = array![1, 2, 3];
    let mut locator = array.get(-1).unwrap();
    assert!(locator.retreat());
    assert_eq!(*locator.value().unwrap(), 2);
    assert!(locator.retreat());
    assert!(!locator.retreat());
    assert!(locator.is_null());
    assert!(!locator.retreat());
}

#[test]
fn test_advance_samples_current_count() {
    let mut array = array![1, 2];
    {
        let mut locator = array.first_mut();
        *locator.value_mut().unwrap() = 5;
        assert!(locator.advance());
        assert!(!locator.advance());
    }
    array.append(3).unwrap();
    let mut locator = array.get(1).unwrap();
    assert!(locator.advance());
    assert_eq!(*locator.value().unwrap(), 3);
}

#[test]
fn test_debug() {
    let array = array![9];
    assert_eq!(format!("{:?}", array.first()), "Locator { index: 0, value: 9 }");
    assert_eq!(format!("{:?}", ElementRef::<i32>::null()), "Locator(null)");
}
