use core::fmt;
use core::mem;

use super::Kernel;
use crate::Box;

/// Single-owner handle to a kernel.
///
/// A handle either owns its kernel, borrows one that somebody else owns, or has
/// been released. Ownership moves out with [`abdicate`](Self::abdicate), which
/// leaves the source `Released`; a released handle drops (and releases) as a
/// no-op, so a handle can always be destroyed again after its kernel moved on.
pub enum KernelHandle<'a, T> {
    Owned(Box<dyn Kernel<Item = T> + 'a>),
    Borrowed(&'a mut (dyn Kernel<Item = T> + 'a)),
    Released,
}

impl<'a, T> KernelHandle<'a, T> {
    pub fn owned<K>(kernel: K) -> Self
    where
        K: Kernel<Item = T> + 'a,
    {
        KernelHandle::Owned(Box::new(kernel))
    }

    pub fn borrowed(kernel: &'a mut (dyn Kernel<Item = T> + 'a)) -> Self {
        KernelHandle::Borrowed(kernel)
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, KernelHandle::Owned(_))
    }

    pub fn is_released(&self) -> bool {
        matches!(self, KernelHandle::Released)
    }

    /// Transfer whatever this handle holds into a new handle.
    pub fn abdicate(&mut self) -> Self {
        mem::replace(self, KernelHandle::Released)
    }

    /// A non-owning alias of this handle's kernel.
    pub fn reference(&mut self) -> KernelHandle<'_, T> {
        KernelHandle::Borrowed(self)
    }

    /// Drop the kernel if owned, and forget it if borrowed.
    pub fn release(&mut self) {
        if self.is_owned() {
            tracing::debug!("releasing owned iteration kernel");
        }
        *self = KernelHandle::Released;
    }
}

impl<T> Kernel for KernelHandle<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            KernelHandle::Owned(kernel) => kernel.next(),
            KernelHandle::Borrowed(kernel) => kernel.next(),
            KernelHandle::Released => panic!("pulled from a released iteration kernel"),
        }
    }
}

impl<T> fmt::Debug for KernelHandle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelHandle::Owned(_) => f.write_str("Owned(..)"),
            KernelHandle::Borrowed(_) => f.write_str("Borrowed(..)"),
            KernelHandle::Released => f.write_str("Released"),
        }
    }
}
