use core::fmt;

use super::{Kernel, KernelHandle};

/// Composes a parent kernel with a transform-or-skip function.
///
/// Each `next` pulls from the parent until the transform returns `Some`, and
/// yields that. Parent values that map to `None` are skipped. This one kernel is
/// both "map" (the transform always returns `Some`, see [`mapping`]) and
/// "filter" (it returns the value unchanged or `None`, see [`filtering`]).
///
/// The filter-map always owns the handle it was given. Whether that handle owns
/// the parent kernel or only borrows it was decided by whoever built it.
pub struct FilterMap<'a, T, F> {
    parent: KernelHandle<'a, T>,
    transform: F,
}

impl<'a, T, U, F> FilterMap<'a, T, F>
where
    F: FnMut(T) -> Option<U>,
{
    pub fn new(parent: KernelHandle<'a, T>, transform: F) -> Self {
        FilterMap { parent, transform }
    }
}

/// A filter-map that transforms every parent value.
pub fn mapping<'a, T, U, G>(
    parent: KernelHandle<'a, T>,
    mut map: G,
) -> FilterMap<'a, T, impl FnMut(T) -> Option<U>>
where
    G: FnMut(T) -> U,
{
    FilterMap::new(parent, move |value| Some(map(value)))
}

/// A filter-map that keeps only the parent values matching `predicate`.
pub fn filtering<'a, T, P>(
    parent: KernelHandle<'a, T>,
    mut predicate: P,
) -> FilterMap<'a, T, impl FnMut(T) -> Option<T>>
where
    P: FnMut(&T) -> bool,
{
    FilterMap::new(parent, move |value| predicate(&value).then_some(value))
}

impl<T, U, F> Kernel for FilterMap<'_, T, F>
where
    F: FnMut(T) -> Option<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        while let Some(value) = self.parent.next() {
            if let Some(mapped) = (self.transform)(value) {
                return Some(mapped);
            }
        }
        None
    }
}

impl<T, F> fmt::Debug for FilterMap<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}
