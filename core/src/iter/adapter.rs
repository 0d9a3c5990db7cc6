use core::iter::FusedIterator;

use super::{Iter, Kernel};

/// Adapts a standard iterator into a kernel.
#[derive(Debug, Clone)]
pub struct StdKernel<I> {
    inner: I,
}

impl<I: Iterator> StdKernel<I> {
    pub fn new(inner: I) -> Self {
        StdKernel { inner }
    }
}

impl<I: Iterator> Kernel for StdKernel<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

/// A standard iterator that drains an [`Iter`] it owns.
#[derive(Debug)]
pub struct IntoIter<'a, T> {
    iter: Iter<'a, T>,
}

impl<T> Iterator for IntoIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.pull()
    }
}

impl<T> FusedIterator for IntoIter<'_, T> {}

impl<'a, T> IntoIterator for Iter<'a, T> {
    type Item = T;
    type IntoIter = IntoIter<'a, T>;

    fn into_iter(self) -> IntoIter<'a, T> {
        IntoIter { iter: self }
    }
}

/// A standard iterator that pulls from a borrowed [`Iter`], which stays usable
/// afterwards.
#[derive(Debug)]
pub struct PullRef<'i, 'a, T> {
    iter: &'i mut Iter<'a, T>,
}

impl<T> Iterator for PullRef<'_, '_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.pull()
    }
}

impl<T> FusedIterator for PullRef<'_, '_, T> {}

impl<'i, 'a, T> IntoIterator for &'i mut Iter<'a, T> {
    type Item = T;
    type IntoIter = PullRef<'i, 'a, T>;

    fn into_iter(self) -> PullRef<'i, 'a, T> {
        PullRef { iter: self }
    }
}
