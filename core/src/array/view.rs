//! Windows over an array's storage that shrink as they are consumed.
//!
//! Consuming a view never changes the array it came from.

use core::mem;

use crate::error::{ErrorKind, Result};

#[derive(Debug, Clone, Copy)]
pub struct View<'a, T> {
    items: &'a [T],
}

impl<'a, T> View<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        View { items }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take the first element off the front.
    #[track_caller]
    pub fn shift_view(&mut self) -> Result<&'a T> {
        match self.items.split_first() {
            Some((first, rest)) => {
                self.items = rest;
                Ok(first)
            }
            None => ErrorKind::EmptyView.raise(),
        }
    }

    /// Take the last element off the back.
    #[track_caller]
    pub fn pop_view(&mut self) -> Result<&'a T> {
        match self.items.split_last() {
            Some((last, rest)) => {
                self.items = rest;
                Ok(last)
            }
            None => ErrorKind::EmptyView.raise(),
        }
    }

    /// Drop up to `amount` elements from the front.
    pub fn shift_start(&mut self, amount: usize) -> &mut Self {
        let amount = amount.min(self.items.len());
        self.items = &self.items[amount..];
        self
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        View { items: &[] }
    }
}

#[derive(Debug)]
pub struct ViewMut<'a, T> {
    items: &'a mut [T],
}

impl<'a, T> ViewMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T]) -> Self {
        ViewMut { items }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[track_caller]
    pub fn shift_view(&mut self) -> Result<&'a mut T> {
        match mem::take(&mut self.items).split_first_mut() {
            Some((first, rest)) => {
                self.items = rest;
                Ok(first)
            }
            None => ErrorKind::EmptyView.raise(),
        }
    }

    #[track_caller]
    pub fn pop_view(&mut self) -> Result<&'a mut T> {
        match mem::take(&mut self.items).split_last_mut() {
            Some((last, rest)) => {
                self.items = rest;
                Ok(last)
            }
            None => ErrorKind::EmptyView.raise(),
        }
    }

    pub fn shift_start(&mut self, amount: usize) -> &mut Self {
        let items = mem::take(&mut self.items);
        let amount = amount.min(items.len());
        self.items = &mut items[amount..];
        self
    }

    pub fn as_slice(&self) -> &[T] {
        &*self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.items
    }

    /// Give up the view, keeping mutable access to what remains.
    pub fn into_slice(self) -> &'a mut [T] {
        self.items
    }
}

impl<T> Default for ViewMut<'_, T> {
    fn default() -> Self {
        ViewMut { items: &mut [] }
    }
}
