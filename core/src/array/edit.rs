use core::{iter, mem};

use super::Array;
use crate::Vec;
use crate::error::{ErrorKind, Result};

impl<T> Array<T> {
    #[track_caller]
    fn ensure_resizable(&self) -> Result<()> {
        if self.is_locked() {
            return ErrorKind::FixedCountMismatch.raise();
        }
        Ok(())
    }

    /// Add `value` at the end and return a reference to it in place.
    #[track_caller]
    pub fn append(&mut self, value: T) -> Result<&mut T> {
        self.ensure_resizable()?;
        let index = self.items.len();
        self.items.push(value);
        Ok(&mut self.items[index])
    }

    /// Append one element built by `make`, which only runs if the append can
    /// happen.
    #[track_caller]
    pub fn append_with(&mut self, make: impl FnOnce() -> T) -> Result<&mut T> {
        self.ensure_resizable()?;
        let index = self.items.len();
        self.items.push(make());
        Ok(&mut self.items[index])
    }

    /// Append a copy of every element of `other`.
    #[track_caller]
    pub fn append_all(&mut self, other: &Array<T>) -> Result<&mut Self>
    where
        T: Clone,
    {
        self.ensure_resizable()?;
        self.items.extend_from_slice(&other.items);
        Ok(self)
    }

    /// Remove and return the last element.
    #[track_caller]
    pub fn pop(&mut self) -> Result<T> {
        self.ensure_resizable()?;
        match self.items.pop() {
            Some(value) => Ok(value),
            None => ErrorKind::PoppingEmpty.raise(),
        }
    }

    /// Remove and return the element at `index`, shifting later ones down.
    #[track_caller]
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        self.ensure_resizable()?;
        let index = self.normalize(index)?;
        self.pop_index(index)
    }

    #[track_caller]
    pub(crate) fn pop_index(&mut self, index: usize) -> Result<T> {
        self.ensure_resizable()?;
        if index >= self.items.len() {
            return ErrorKind::PoppingEmpty.raise();
        }
        Ok(self.items.remove(index))
    }

    /// Remove every element equal to `value`, returning how many went.
    #[track_caller]
    pub fn remove(&mut self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.ensure_resizable()?;
        let before = self.items.len();
        self.items.retain(|item| item != value);
        Ok(before - self.items.len())
    }

    /// Remove the element at `index`.
    #[track_caller]
    pub fn erase(&mut self, index: isize) -> Result<()> {
        self.erase_n(index, 1)
    }

    /// Remove up to `count` elements starting at `index`.
    ///
    /// Elements past the end are simply not there to remove, so an `index`
    /// at or beyond the count removes nothing.
    #[track_caller]
    pub fn erase_n(&mut self, index: isize, count: isize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        if count < 0 {
            return ErrorKind::InvalidArgument.raise();
        }
        self.ensure_resizable()?;
        let len = self.items.len();
        let start = self.normalize(index)?.min(len);
        let end = start.saturating_add(count.unsigned_abs()).min(len);
        self.items.drain(start..end);
        Ok(())
    }

    /// Search for the first element equal to `value`. On a match its position
    /// is written to `*index`; on a miss `*index` is left untouched.
    pub fn find_first(&self, value: &T, index: &mut usize) -> bool
    where
        T: PartialEq,
    {
        match self.position(value) {
            Some(found) => {
                *index = found;
                true
            }
            None => false,
        }
    }

    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Ascending, stable sort.
    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.items.sort();
        self
    }

    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> core::cmp::Ordering) -> &mut Self {
        self.items.sort_by(compare);
        self
    }

    /// Release the storage entirely, capacity included.
    #[track_caller]
    pub fn deallocate(&mut self) -> Result<()> {
        self.ensure_resizable()?;
        tracing::debug!(capacity = self.items.capacity(), "deallocating array storage");
        self.items = Vec::new();
        Ok(())
    }

    /// Make room for at least `capacity` elements in total.
    #[track_caller]
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if self.fixed_count.is_some_and(|fixed| capacity > fixed) {
            return ErrorKind::FixedCountMismatch.raise();
        }
        self.items.reserve(capacity.saturating_sub(self.items.len()));
        Ok(())
    }
}

impl<T: Default> Array<T> {
    /// Unlocked arrays become empty. Fixed-count arrays keep their count and
    /// reset every element to `T::default()`.
    pub fn clear(&mut self) {
        if self.is_locked() {
            self.items.iter_mut().for_each(|item| *item = T::default());
        } else {
            self.items.clear();
        }
    }

    /// Put `value` at `index`, growing if needed, and return what was there.
    #[track_caller]
    pub fn swap(&mut self, index: isize, value: T) -> Result<T> {
        let slot = self.at_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Exchange two elements, growing to reach the larger index.
    #[track_caller]
    pub fn swap_indices(&mut self, first: isize, second: isize) -> Result<()> {
        let first = self.normalize(first)?;
        let second = self.normalize(second)?;
        if first == second {
            return Ok(());
        }
        self.write_slot(first.max(second))?;
        self.items.swap(first, second);
        Ok(())
    }
}

impl<T: Clone + Default> Array<T> {
    /// Insert `value` before `index`.
    #[track_caller]
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        self.insert_n(index, value, 1)
    }

    /// Insert `count` copies of `value` before `index`. An index past the end
    /// first grows the array to reach it.
    #[track_caller]
    pub fn insert_n(&mut self, index: isize, value: T, count: isize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        if count < 0 {
            return ErrorKind::InvalidArgument.raise();
        }
        self.ensure_resizable()?;
        let index = self.normalize(index)?;
        if index > self.items.len() {
            self.items.resize_with(index, T::default);
        }
        self.items
            .splice(index..index, iter::repeat_n(value, count.unsigned_abs()));
        Ok(())
    }
}
