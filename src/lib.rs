//! Keel - Growable arrays with an optional fixed count, and lazy pull iterators
//!
//! # Overview
//!
//! Keel provides two building blocks that are designed to be used together:
//!
//! - [`Array<T>`]: an index-addressable sequence with auto-growing writes,
//!   negative indexing and an optional *fixed count* that rejects every
//!   operation that would resize it
//! - [`Iter<'a, T>`]: a single-pass, pull-based iterator built from small
//!   [`Kernel`]s that can be composed, borrowed or handed off
//!
//! # Quick Start
//!
//! ```
//! use keel::{Array, Iter, array};
//!
//! // Writes past the end grow the array
//! let mut scores = Array::<u32>::new();
//! scores[2] = 7;
//! assert_eq!(scores, array![0, 0, 7]);
//!
//! // Iterators pull lazily and compose through filter-maps
//! let negated: Array<i32> = Iter::<i32>::range(100)
//!     .into_iterate(|i| (i % 30 == 0).then_some(-i))
//!     .into();
//! assert_eq!(negated, array![0, -30, -60, -90]);
//! ```
//!
//! # Fixed Count
//!
//! The fixed count belongs to the variable, not the value. Assigning into a
//! fixed-count array truncates or pads the contents to fit:
//!
//! ```
//! use keel::{Array, ErrorKind, array};
//!
//! let mut fixed = Array::<i32>::fixed_length(3);
//! fixed.assign(array![1, 2, 3, 4, 5]);
//! assert_eq!(fixed, array![1, 2, 3]);
//! assert_eq!(fixed.append(6).unwrap_err().kind(), ErrorKind::FixedCountMismatch);
//! ```
//!
//! # Borrowing Iterators
//!
//! A child created with [`Iter::iterate`] borrows its parent's kernel. Once
//! the child is gone the parent picks up where the child stopped:
//!
//! ```
//! use keel::Iter;
//!
//! let mut parent = Iter::<i32>::range(10);
//! {
//!     let mut evens = parent.iterate(|i| (i % 2 == 0).then_some(i));
//!     assert_eq!(evens.pull(), Some(0));
//!     assert_eq!(evens.pull(), Some(2));
//! }
//! assert_eq!(parent.pull(), Some(3));
//! ```

pub use keel_core::array;

// Re-export the container API
pub use keel_core::array::{Array, Element, ElementMut, ElementRef, Locator, View, ViewMut};

// Re-export the iteration API
pub use keel_core::iter::{
    self, Countable, Cursor, FilterMap, Iter, Join, Kernel, KernelHandle, filtering, mapping,
};

// Re-export errors
pub use keel_core::error::{Error, ErrorKind, Result};
