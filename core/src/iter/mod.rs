//! Lazy, pull-based iteration.
//!
//! A [`Kernel`] is the smallest unit of iteration: some private state plus a
//! single `next` operation that either produces a value or signals exhaustion.
//! An [`Iter`] owns (or borrows) a kernel through a [`KernelHandle`] and adds the
//! caller-facing protocol on top: monotonic exhaustion, short-circuit search,
//! composition through [`FilterMap`], joining and loop adaptation.
//!
//! # Example
//!
//! ```
//! use keel_core::{Array, Iter};
//!
//! let negated: Array<i32> = Iter::<i32>::range(100)
//!     .into_iterate(|i| (i % 30 == 0).then_some(-i))
//!     .into();
//!
//! assert_eq!(negated, Array::from([0, -30, -60, -90]));
//! ```

mod adapter;
mod cursor;
mod filter_map;
mod handle;
mod join;
mod range;


use core::fmt;
use core::mem;

use crate::Box;

pub use adapter::{IntoIter, PullRef, StdKernel};
pub use cursor::Cursor;
pub use filter_map::{FilterMap, filtering, mapping};
pub use handle::KernelHandle;
pub use join::Join;
pub use range::{Countable, RangeKernel};

/// Produces the next value, or `None` once exhausted.
///
/// Exhaustion should be absorbing: once `next` has returned `None` it keeps
/// returning `None`. [`Iter`] guarantees this to its callers regardless, by never
/// consulting an exhausted kernel again.
pub trait Kernel {
    type Item;

    fn next(&mut self) -> Option<Self::Item>;
}

impl<K: Kernel + ?Sized> Kernel for &mut K {
    type Item = K::Item;

    fn next(&mut self) -> Option<K::Item> {
        (**self).next()
    }
}

impl<K: Kernel + ?Sized> Kernel for Box<K> {
    type Item = K::Item;

    fn next(&mut self) -> Option<K::Item> {
        (**self).next()
    }
}

/// A handle to an iteration kernel.
///
/// Iterators are single-pass. Once [`pull`](Iter::pull) returns `None`, every
/// later call returns `None` too; callers must not assume restartability.
pub struct Iter<'a, T> {
    kernel: KernelHandle<'a, T>,
    exhausted: bool,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(kernel: KernelHandle<'a, T>) -> Self {
        Iter {
            kernel,
            exhausted: false,
        }
    }

    /// Box `kernel` and take ownership of it.
    pub fn from_kernel<K>(kernel: K) -> Self
    where
        K: Kernel<Item = T> + 'a,
    {
        Iter::new(KernelHandle::owned(kernel))
    }

    /// Adapt any standard iterator.
    pub fn from_std<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Iter::from_kernel(StdKernel::new(iter.into_iter()))
    }

    /// An iterator that is already exhausted.
    pub fn empty() -> Self {
        Iter {
            kernel: KernelHandle::Released,
            exhausted: true,
        }
    }

    /// Pull the next value from the kernel.
    ///
    /// # Panics
    ///
    /// Panics if the kernel was released or abdicated while the iterator was
    /// still active.
    pub fn pull(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let next = self.kernel.next();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Pull until `predicate` matches. Consumes everything up to and including
    /// the first match.
    pub fn check_any(&mut self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        while let Some(value) = self.pull() {
            if predicate(&value) {
                return true;
            }
        }
        false
    }

    /// Create a child iterator that filter-maps the values of this one.
    ///
    /// The child borrows this iterator's kernel, so this iterator has to
    /// outlive it. Once the child is dropped, pulling resumes here from
    /// wherever the child stopped.
    pub fn iterate<'b, U, F>(&'b mut self, transform: F) -> Iter<'b, U>
    where
        U: 'b,
        F: FnMut(T) -> Option<U> + 'b,
    {
        let parent: &'b mut (dyn Kernel<Item = T> + 'b) = self;
        Iter::from_kernel(FilterMap::new(KernelHandle::borrowed(parent), transform))
    }

    /// Like [`iterate`](Self::iterate), but the child takes ownership of this
    /// iterator's kernel.
    pub fn into_iterate<U, F>(self, transform: F) -> Iter<'a, U>
    where
        T: 'a,
        U: 'a,
        F: FnMut(T) -> Option<U> + 'a,
    {
        Iter::from_kernel(FilterMap::new(KernelHandle::owned(self), transform))
    }

    /// Move the kernel into a new iterator.
    ///
    /// `self` is left as an empty shell: dropping or releasing it is a no-op,
    /// pulling from it panics.
    pub fn abdicate(&mut self) -> Iter<'a, T> {
        Iter {
            kernel: self.kernel.abdicate(),
            exhausted: mem::replace(&mut self.exhausted, false),
        }
    }

    /// Destroy the kernel now rather than at end of scope. Idempotent.
    pub fn release(&mut self) {
        self.kernel.release();
    }

    /// Consume every value, handing them to `delimiter` to be joined.
    pub fn join<D: Join<T>>(self, delimiter: D) -> D::Output {
        delimiter.join(self)
    }

    /// A loop cursor positioned at the first value.
    pub fn cursor(&mut self) -> Cursor<'_, 'a, T> {
        Cursor::begin(self)
    }
}

impl<'a, T: Countable + 'a> Iter<'a, T> {
    /// Counts 0, 1, ... up to but excluding `end`.
    pub fn range(end: T) -> Self {
        Iter::range_from(T::ZERO, end)
    }

    /// Counts `start`, `start + 1`, ... up to but excluding `end`.
    pub fn range_from(start: T, end: T) -> Self {
        Iter::from_kernel(RangeKernel::new(start, end))
    }
}

impl<T> Kernel for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Iter::empty()
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("kernel", &self.kernel)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

// Iterators are single-threaded by construction.
static_assertions::assert_not_impl_any!(Iter<'static, u32>: Send, Sync);
