//! A growable, index-addressable sequence with an optional fixed count.
//!
//! [`Array<T>`] owns contiguous storage. Indices are signed: negative indices
//! count back from the end, so `-1` is the last element. Writing past the end
//! through a mutable array grows it, filling the gap with `T::default()`.
//!
//! An array can be *fixed count* ([`Array::fixed_length`], [`Array::lock`]).
//! Every operation that would change its count fails with
//! [`ErrorKind::FixedCountMismatch`]. The fixed count belongs to the variable,
//! not to the contents: [`assign`](Array::assign), [`assign_from`](Array::assign_from)
//! and [`take_from`](Array::take_from) keep the destination's setting and truncate
//! or pad the incoming contents to fit, while [`Clone::clone`] always produces a
//! variable-count copy.
//!
//! # Example
//!
//! ```
//! use keel_core::{Array, ErrorKind};
//!
//! let mut array = Array::<i32>::new();
//! *array.at_mut(3)? = 5;
//! assert_eq!(array, Array::from([0, 0, 0, 5]));
//! assert_eq!(array[-1], 5);
//!
//! let mut fixed = Array::<i32>::fixed_length(3);
//! assert_eq!(fixed.append(1).unwrap_err().kind(), ErrorKind::FixedCountMismatch);
//! # Ok::<(), keel_core::Error>(())
//! ```

mod assign;
mod edit;
mod locator;
mod view;

#[cfg(test)]
mod locator_test;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Index, IndexMut};
use core::slice;

use crate::error::{ErrorKind, Result};
use crate::iter::Iter;
use crate::{Vec, vec};

pub use locator::{Element, ElementMut, ElementRef, Locator};
pub use view::{View, ViewMut};

#[derive(Debug)]
pub struct Array<T> {
    items: Vec<T>,
    /// `Some(count)` once fixed; never cleared for the lifetime of the variable.
    fixed_count: Option<usize>,
}

impl<T> Array<T> {
    pub const fn new() -> Self {
        Array {
            items: Vec::new(),
            fixed_count: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Array::from_vec(Vec::with_capacity(capacity))
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Array {
            items,
            fixed_count: None,
        }
    }

    /// Fix the count at its current value. Idempotent.
    pub fn lock(&mut self) {
        self.fixed_count = Some(self.items.len());
    }

    pub fn is_locked(&self) -> bool {
        self.fixed_count.is_some()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Resolve a signed index: negative values count back from the end.
    ///
    /// The result may still be past the end; only a result below zero fails.
    #[track_caller]
    pub fn normalize(&self, index: isize) -> Result<usize> {
        if index >= 0 {
            return Ok(index.unsigned_abs());
        }
        let back = index.unsigned_abs();
        if back > self.items.len() {
            return ErrorKind::TooNegativeIndex.raise();
        }
        Ok(self.items.len() - back)
    }

    /// Read an element. Never grows: out of range is an error, exactly as it
    /// would be for a fixed-count array.
    #[track_caller]
    pub fn at(&self, index: isize) -> Result<&T> {
        let index = self.normalize(index)?;
        self.read_slot(index)
    }

    #[track_caller]
    pub(crate) fn read_slot(&self, index: usize) -> Result<&T> {
        match self.items.get(index) {
            Some(value) => Ok(value),
            None => ErrorKind::FixedCountMismatch.raise(),
        }
    }

    /// A locator for `index`, which is null if `index` is past the end.
    ///
    /// Unlike [`at`](Self::at), this never fails for large indices.
    #[track_caller]
    pub fn get(&self, index: isize) -> Result<ElementRef<'_, T>> {
        let index = self.normalize(index)?;
        Ok(Locator::new(self, index))
    }

    #[track_caller]
    pub fn get_mut(&mut self, index: isize) -> Result<ElementMut<'_, T>> {
        let index = self.normalize(index)?;
        Ok(Locator::new(self, index))
    }

    /// A locator for the first element, or a null locator if empty.
    pub fn first(&self) -> ElementRef<'_, T> {
        if self.is_empty() {
            Locator::null()
        } else {
            Locator::new(self, 0)
        }
    }

    pub fn first_mut(&mut self) -> ElementMut<'_, T> {
        if self.is_empty() {
            Locator::null()
        } else {
            Locator::new(self, 0)
        }
    }

    pub fn view(&self) -> View<'_, T> {
        View::new(&self.items)
    }

    pub fn view_mut(&mut self) -> ViewMut<'_, T> {
        ViewMut::new(&mut self.items)
    }

    pub fn values(&self) -> Iter<'_, &T> {
        Iter::from_std(self.items.iter())
    }

    pub fn values_mut(&mut self) -> Iter<'_, &mut T> {
        Iter::from_std(self.items.iter_mut())
    }

    /// Drain the array through an iterator that owns its storage.
    pub fn into_values<'a>(self) -> Iter<'a, T>
    where
        T: 'a,
    {
        Iter::from_std(self.items)
    }

    /// Index and value pairs.
    pub fn elements(&self) -> Iter<'_, Element<&T>> {
        Iter::from_std(
            self.items
                .iter()
                .enumerate()
                .map(|(index, value)| Element { index, value }),
        )
    }

    pub fn elements_mut(&mut self) -> Iter<'_, Element<&mut T>> {
        Iter::from_std(
            self.items
                .iter_mut()
                .enumerate()
                .map(|(index, value)| Element { index, value }),
        )
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Default> Array<T> {
    /// An array of `count` default values whose count can never change.
    pub fn fixed_length(count: usize) -> Self {
        let mut items = Vec::with_capacity(count);
        items.resize_with(count, T::default);
        Array {
            items,
            fixed_count: Some(count),
        }
    }

    /// Write access to an element, growing the array up to `index` if needed.
    #[track_caller]
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let index = self.normalize(index)?;
        self.write_slot(index)
    }

    #[track_caller]
    pub(crate) fn write_slot(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.items.len() {
            self.set_count(index + 1)?;
        }
        Ok(&mut self.items[index])
    }

    /// Resize: growing fills with `T::default()`, shrinking truncates.
    #[track_caller]
    pub fn set_count(&mut self, count: usize) -> Result<()> {
        if self.fixed_count.is_some_and(|fixed| fixed != count) {
            return ErrorKind::FixedCountMismatch.raise();
        }
        self.items.resize_with(count, T::default);
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

/// A variable-count copy, whatever the source's setting. Use
/// [`assign_from`](Array::assign_from) to copy into a fixed-count variable.
impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_vec(self.items.clone())
    }
}

/// The fixed count is ignored: it belongs to variables, not values.
impl<T: PartialEq<U>, U> PartialEq<Array<U>> for Array<T> {
    fn eq(&self, other: &Array<U>) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: PartialOrd> PartialOrd for Array<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord> Ord for Array<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.items.cmp(&other.items)
    }
}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

// --- Indexing ---
//
// `Index` and `IndexMut` panic where `at` and `at_mut` return an error.

impl<T> Index<isize> for Array<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: isize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: Default> IndexMut<isize> for Array<T> {
    #[track_caller]
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

// --- Construction ---

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array::from_vec(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        Array::from_vec(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(items: &[T]) -> Self {
        Array::from_vec(items.to_vec())
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from_vec(iter.into_iter().collect())
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

// --- Concatenation ---
//
// Concatenating always produces a new, variable-count array.

impl<T> Add for Array<T> {
    type Output = Array<T>;

    fn add(self, other: Array<T>) -> Array<T> {
        let mut items = self.items;
        items.extend(other.items);
        Array::from_vec(items)
    }
}

impl<T: Clone> Add<&Array<T>> for &Array<T> {
    type Output = Array<T>;

    fn add(self, other: &Array<T>) -> Array<T> {
        let mut items = Vec::with_capacity(self.count() + other.count());
        items.extend_from_slice(&self.items);
        items.extend_from_slice(&other.items);
        Array::from_vec(items)
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(Array<u64>, [usize; 5]);
static_assertions::assert_impl_all!(Array<u8>: Send, Sync, Clone, Default, Eq, Hash);
