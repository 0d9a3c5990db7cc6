//! Errors raised by containers, views and element locators.
//!
//! Every failure carries an [`ErrorKind`] and the source location of the call
//! that raised it. Public fallible operations are `#[track_caller]`, so the
//! location points at the user's code rather than at this crate.

use core::fmt;
use core::panic::Location;

use thiserror::Error as ThisError;

/// The kind of failure, independent of where it happened.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A negative index was still negative after adding the count.
    #[error("array indexing was too negative")]
    TooNegativeIndex,

    /// A count-changing operation on a fixed-count array, an out-of-range
    /// access through a shared reference, or a swap between arrays of
    /// incompatible counts where either side is fixed.
    #[error("array is fixed count; cannot change its count")]
    FixedCountMismatch,

    /// `pop()` on an empty array, or `pop_at()` past the end.
    #[error("array cannot pop due to insufficient count")]
    PoppingEmpty,

    /// A negative repeat count.
    #[error("array was passed an invalid argument")]
    InvalidArgument,

    /// `shift_view()` or `pop_view()` on an exhausted view.
    #[error("array view is empty")]
    EmptyView,

    /// Dereferencing or popping through a null element locator.
    #[error("array element locator is null")]
    NullHandleAccess,
}

impl ErrorKind {
    #[track_caller]
    pub(crate) fn raise<T>(self) -> Result<T> {
        Err(Error::new(self))
    }
}

/// A located failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    location: &'static Location<'static>,
}

impl Error {
    /// Create an error located at the caller.
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind,
            location: Location::caller(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where the failing operation was called from.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl From<ErrorKind> for Error {
    #[track_caller]
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.kind,
            self.location.file(),
            self.location.line()
        )
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.kind)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
