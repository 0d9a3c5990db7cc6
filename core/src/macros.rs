/// Build an [`Array`](crate::Array) from a list of values, like `vec!`.
///
/// ```
/// use keel_core::{Array, array};
///
/// assert_eq!(array![1, 2, 3], Array::from([1, 2, 3]));
/// assert_eq!(array![7; 2], Array::from([7, 7]));
/// let empty: Array<u8> = array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($value:expr; $count:expr) => {
        $crate::Array::from_vec($crate::shim::vec![$value; $count])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Array::from_vec($crate::shim::vec![$($value),+])
    };
}
