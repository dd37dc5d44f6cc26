// Copyright 2025 the Rich Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for builder operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending position and the number of children
/// the builder held when the operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The position provided by the caller.
    index: usize,

    /// The number of children at the time of failure.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the child count context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The position provided by the caller.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The number of children held by the builder at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::OutOfRange,
            index,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::OutOfRange => write!(
                f,
                "position {} out of range for {} children (expected 0..={})",
                self.index, self.len, self.len
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A position was greater than the number of children.
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::format;

    #[test]
    fn out_of_range_message() {
        let e = Error::out_of_range(4, 2);
        assert_eq!(e.kind(), ErrorKind::OutOfRange);
        assert_eq!(e.index(), 4);
        assert_eq!(e.len(), 2);
        let msg = format!("{e}");
        assert!(msg.contains("position 4"));
        assert!(msg.contains("2 children"));
        assert!(msg.contains("0..=2"));
    }
}
