//! Assignment between array variables.
//!
//! A fixed count is a property of the variable. These operations replace the
//! contents of `self` and, when `self` is fixed count, truncate or pad the
//! incoming contents back to that count.

use core::mem;

use super::Array;
use crate::Vec;
use crate::error::{ErrorKind, Result};
use crate::iter::Iter;

impl<T: Default> Array<T> {
    fn fit_fixed_count(&mut self) {
        let Some(fixed) = self.fixed_count else {
            return;
        };
        if self.items.len() != fixed {
            tracing::warn!(
                fixed_count = fixed,
                incoming = self.items.len(),
                "assigned a different count into a fixed-count array; truncating or padding"
            );
            self.items.resize_with(fixed, T::default);
        }
    }

    /// Move-assign: `self` takes over `source`'s storage.
    pub fn assign(&mut self, source: Array<T>) {
        self.items = source.items;
        self.fit_fixed_count();
    }

    /// Move-assign out of a variable that stays usable: `source` is left
    /// empty and variable count.
    pub fn take_from(&mut self, source: &mut Array<T>) {
        self.items = mem::take(&mut source.items);
        source.fixed_count = None;
        self.fit_fixed_count();
    }

    /// Replace the contents with whatever `source` produces.
    pub fn assign_pull<S>(&mut self, source: S) -> &mut Self
    where
        Array<T>: From<S>,
    {
        self.assign(Array::from(source));
        self
    }
}

impl<T: Clone + Default> Array<T> {
    /// Copy-assign.
    pub fn assign_from(&mut self, source: &Array<T>) {
        self.items.clone_from(&source.items);
        self.fit_fixed_count();
    }
}

impl<T> Array<T> {
    /// Exchange storage with `other`. Each variable keeps its own fixed count,
    /// so if either is fixed the counts must already agree.
    #[track_caller]
    pub fn swap_with(&mut self, other: &mut Array<T>) -> Result<()> {
        if (self.is_locked() || other.is_locked()) && self.count() != other.count() {
            return ErrorKind::FixedCountMismatch.raise();
        }
        mem::swap(&mut self.items, &mut other.items);
        Ok(())
    }

    /// Append everything `source` produces.
    #[track_caller]
    pub fn extend_pull<S>(&mut self, source: S) -> Result<&mut Self>
    where
        Array<T>: From<S>,
    {
        if self.is_locked() {
            return ErrorKind::FixedCountMismatch.raise();
        }
        self.items.extend(Array::from(source).items);
        Ok(self)
    }
}

// --- Collecting iterators ---

impl<'a, T> From<Iter<'a, T>> for Array<T> {
    fn from(iter: Iter<'a, T>) -> Self {
        Array::from_vec(iter.into_iter().collect())
    }
}

impl<'a, 'b, T: Clone> From<Iter<'a, &'b T>> for Array<T> {
    fn from(iter: Iter<'a, &'b T>) -> Self {
        Array::from_vec(iter.into_iter().cloned().collect())
    }
}

impl<'a, 'b, T: Clone> From<Iter<'a, &'b mut T>> for Array<T> {
    fn from(iter: Iter<'a, &'b mut T>) -> Self {
        let items: Vec<T> = iter.into_iter().map(|value| value.clone()).collect();
        Array::from_vec(items)
    }
}
