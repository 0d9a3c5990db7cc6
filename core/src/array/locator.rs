use core::fmt;
use core::ops::{Deref, DerefMut};

use super::Array;
use crate::error::{ErrorKind, Result};

/// An index paired with the value found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<V> {
    pub index: usize,
    pub value: V,
}

/// A position in an array that may or may not hold a value.
///
/// A locator is *null* when it has no array, or when its index is past the
/// array's current count. Reading through a null locator is an error, never
/// a panic; [`otherwise`](Locator::otherwise) and [`or_default`](Locator::or_default)
/// give a fallback instead.
#[derive(Clone, Copy)]
pub struct Locator<A> {
    array: Option<A>,
    index: usize,
}

/// A read-only locator.
pub type ElementRef<'a, T> = Locator<&'a Array<T>>;
/// A locator that can write, growing the array like [`Array::at_mut`].
pub type ElementMut<'a, T> = Locator<&'a mut Array<T>>;

impl<A> Locator<A> {
    pub(crate) fn new(array: A, index: usize) -> Self {
        Locator {
            array: Some(array),
            index,
        }
    }

    pub fn null() -> Self {
        Locator {
            array: None,
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T, A: Deref<Target = Array<T>>> Locator<A> {
    fn slot(&self) -> Option<&T> {
        self.array.as_deref()?.as_slice().get(self.index)
    }

    pub fn is_null(&self) -> bool {
        self.slot().is_none()
    }

    pub fn or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.slot().cloned().unwrap_or_default()
    }

    /// Step forward. Stepping past the array's count as it is now nulls the
    /// locator. Returns whether the locator is still non-null.
    pub fn advance(&mut self) -> bool {
        let Some(count) = self.array.as_deref().map(Array::count) else {
            return false;
        };
        if self.index + 1 >= count {
            self.array = None;
            return false;
        }
        self.index += 1;
        true
    }

    /// Step back. Stepping below zero nulls the locator.
    pub fn retreat(&mut self) -> bool {
        if self.array.is_none() {
            return false;
        }
        if self.index == 0 {
            self.array = None;
            return false;
        }
        self.index -= 1;
        true
    }
}

// A shared locator hands out values borrowed from the array itself, so they
// outlive the locator.
impl<'a, T> Locator<&'a Array<T>> {
    #[track_caller]
    pub fn value(&self) -> Result<&'a T> {
        match self.array {
            Some(array) => array.read_slot(self.index),
            None => ErrorKind::NullHandleAccess.raise(),
        }
    }

    /// The value, or `default` when null.
    pub fn otherwise<'s>(&self, default: &'s T) -> &'s T
    where
        'a: 's,
    {
        match self.array.and_then(|array| array.as_slice().get(self.index)) {
            Some(value) => value,
            None => default,
        }
    }

    #[track_caller]
    pub fn element(&self) -> Result<Element<&'a T>> {
        let value = self.value()?;
        Ok(Element {
            index: self.index,
            value,
        })
    }
}

impl<T> Locator<&mut Array<T>> {
    #[track_caller]
    pub fn value(&self) -> Result<&T> {
        match self.array.as_deref() {
            Some(array) => array.read_slot(self.index),
            None => ErrorKind::NullHandleAccess.raise(),
        }
    }

    /// The value, or `default` when null.
    pub fn otherwise<'s>(&'s self, default: &'s T) -> &'s T {
        self.slot().unwrap_or(default)
    }

    #[track_caller]
    pub fn element(&self) -> Result<Element<&T>> {
        let value = self.value()?;
        Ok(Element {
            index: self.index,
            value,
        })
    }
}

impl<T, A: DerefMut<Target = Array<T>>> Locator<A> {
    /// Remove the located element from its array.
    #[track_caller]
    pub fn pop(&mut self) -> Result<T> {
        let index = self.index;
        match self.array.as_deref_mut() {
            Some(array) if index < array.count() => array.pop_index(index),
            _ => ErrorKind::NullHandleAccess.raise(),
        }
    }
}

impl<T: Default, A: DerefMut<Target = Array<T>>> Locator<A> {
    /// Write access, growing the array to reach the index if needed.
    #[track_caller]
    pub fn value_mut(&mut self) -> Result<&mut T> {
        let index = self.index;
        match self.array.as_deref_mut() {
            Some(array) => array.write_slot(index),
            None => ErrorKind::NullHandleAccess.raise(),
        }
    }
}

impl<T: fmt::Debug, A: Deref<Target = Array<T>>> fmt::Debug for Locator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot() {
            Some(value) => f
                .debug_struct("Locator")
                .field("index", &self.index)
                .field("value", value)
                .finish(),
            None => f.write_str("Locator(null)"),
        }
    }
}
