#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// Needed so that macros can uniformly refer to `::keel_core` and still work
// from within this crate or a different one.
extern crate self as keel_core;

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly basically so that macros can always refer to these.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod array;
pub mod error;
pub mod iter;
mod macros;

pub use array::{Array, Element, ElementMut, ElementRef, Locator, View, ViewMut};
pub use error::{Error, ErrorKind, Result};
pub use iter::{Countable, Cursor, FilterMap, Iter, Join, Kernel, KernelHandle};
