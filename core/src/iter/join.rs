use core::fmt::Display;

use super::Iter;
use crate::{String, ToString};

/// Something that knows how to join the values of an iterator.
///
/// [`Iter::join`] hands its values over to the delimiter, so the same call reads
/// naturally whatever the output type is.
pub trait Join<T> {
    type Output;

    fn join(self, items: Iter<'_, T>) -> Self::Output;
}

fn join_displayed<T: Display>(delimiter: &str, mut items: Iter<'_, T>) -> String {
    let mut joined = String::new();
    if let Some(first) = items.pull() {
        joined.push_str(&first.to_string());
        while let Some(item) = items.pull() {
            joined.push_str(delimiter);
            joined.push_str(&item.to_string());
        }
    }
    joined
}

impl<T: Display> Join<T> for &str {
    type Output = String;

    fn join(self, items: Iter<'_, T>) -> String {
        join_displayed(self, items)
    }
}

impl<T: Display> Join<T> for String {
    type Output = String;

    fn join(self, items: Iter<'_, T>) -> String {
        join_displayed(&self, items)
    }
}

impl<T: Display> Join<T> for char {
    type Output = String;

    fn join(self, items: Iter<'_, T>) -> String {
        let mut buffer = [0; 4];
        join_displayed(self.encode_utf8(&mut buffer), items)
    }
}
