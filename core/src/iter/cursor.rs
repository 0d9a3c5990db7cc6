use core::fmt;

use super::Iter;

/// Imperative loop adaptation for an [`Iter`].
///
/// A cursor eagerly pulls and buffers the current value so the loop body can
/// work with it by reference. [`Cursor::end`] is an always-exhausted sentinel
/// that compares equal to any exhausted cursor. Two cursors that both belong to
/// an iterator are equal only if it is the same iterator and their exhaustion
/// matches; position never matters.
///
/// ```
/// use keel_core::{Cursor, Iter};
///
/// let mut squares = Iter::<i32>::range(4);
/// let mut cursor = squares.cursor();
/// let mut seen = Vec::new();
/// while cursor != Cursor::end() {
///     if let Some(value) = cursor.current_mut() {
///         *value = *value * *value;
///         seen.push(*value);
///     }
///     cursor.advance();
/// }
/// assert_eq!(seen, [0, 1, 4, 9]);
/// ```
pub struct Cursor<'i, 'a, T> {
    iter: Option<&'i mut Iter<'a, T>>,
    current: Option<T>,
}

impl<'i, 'a, T> Cursor<'i, 'a, T> {
    pub(super) fn begin(iter: &'i mut Iter<'a, T>) -> Self {
        let current = iter.pull();
        Cursor {
            iter: Some(iter),
            current,
        }
    }

    pub fn end() -> Self {
        Cursor {
            iter: None,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut()
    }

    /// Replace the buffered value with the next one pulled.
    pub fn advance(&mut self) -> &mut Self {
        self.current = match self.iter.as_deref_mut() {
            Some(iter) => iter.pull(),
            None => None,
        };
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<T> PartialEq for Cursor<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        let same_source = match (self.iter.as_deref(), other.iter.as_deref()) {
            (Some(lhs), Some(rhs)) => core::ptr::eq(lhs, rhs),
            // The end sentinel belongs to no iterator.
            _ => true,
        };
        same_source && self.is_exhausted() == other.is_exhausted()
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
