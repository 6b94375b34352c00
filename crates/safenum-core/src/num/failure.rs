// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use thiserror::Error;

/// The category of a checked arithmetic outcome.
///
/// `None` marks success. Every other variant names the reason a result
/// carries no value. The set is closed; producers must pick the variant
/// precisely because dispatch routes on it.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::failure::FailureKind;
/// assert!(!FailureKind::None.is_failure());
/// assert!(FailureKind::Domain.is_failure());
/// assert_eq!(FailureKind::Overflow.to_string(), "overflow error");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum FailureKind {
    /// Not a failure; the result holds a value.
    #[default]
    None,
    /// The magnitude exceeded the largest representable value.
    Overflow,
    /// The magnitude fell below the smallest representable value.
    Underflow,
    /// The value cannot be represented in the result type.
    Range,
    /// The operation is mathematically undefined (e.g. division by zero).
    Domain,
    /// Never produced by this crate. Dispatch ignores it.
    Uninitialized,
}

impl FailureKind {
    /// All categories, in declaration order.
    pub const ALL: [FailureKind; 6] = [
        FailureKind::None,
        FailureKind::Overflow,
        FailureKind::Underflow,
        FailureKind::Range,
        FailureKind::Domain,
        FailureKind::Uninitialized,
    ];

    /// Returns `true` for every category except `None`.
    #[inline(always)]
    pub const fn is_failure(self) -> bool {
        !matches!(self, FailureKind::None)
    }

    /// Returns a short, human readable name for the category.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureKind::None => "none",
            FailureKind::Overflow => "overflow error",
            FailureKind::Underflow => "underflow error",
            FailureKind::Range => "range error",
            FailureKind::Domain => "domain error",
            FailureKind::Uninitialized => "uninitialized",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The payload of a failed checked operation: a category and a fixed
/// diagnostic message.
///
/// A `Failure` never carries `FailureKind::None`. It is also the error type
/// obtained when converting a `CheckedResult<R>` into a `Result<R, Failure>`,
/// and displays as its message.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::failure::{Failure, FailureKind};
/// let f = Failure::new(FailureKind::Domain, "division by zero");
/// assert_eq!(f.kind(), FailureKind::Domain);
/// assert_eq!(f.to_string(), "division by zero");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
#[error("{message}")]
pub struct Failure {
    kind: FailureKind,
    message: &'static str,
}

impl Failure {
    /// Creates a new `Failure`.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is `FailureKind::None`. In a const context this is a
    /// compile error.
    #[inline]
    pub const fn new(kind: FailureKind, message: &'static str) -> Self {
        assert!(
            kind.is_failure(),
            "Invalid failure: a failure cannot be constructed with `FailureKind::None`"
        );
        Self { kind, message }
    }

    /// Returns the failure category. Never `FailureKind::None`.
    #[inline(always)]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the diagnostic message.
    #[inline(always)]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}
