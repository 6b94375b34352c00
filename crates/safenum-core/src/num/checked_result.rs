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

use crate::num::failure::{Failure, FailureKind};
use std::str::FromStr;

/// The outcome of a checked arithmetic operation: either a value of type `R`
/// or a categorized `Failure`.
///
/// The category and the active payload always agree, and a result is never
/// mutated after construction; combinators produce new results instead.
///
/// # Invariants
///
/// - `kind() == FailureKind::None` if and only if a value is held.
/// - Reading the value of a failed result, or the message of a successful
///   one, is a contract violation and panics. Check `is_valid()` first, or
///   use the non-panicking `ok`, `as_value` and `as_failure`.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::checked_result::CheckedResult;
/// # use safenum_core::num::failure::FailureKind;
/// let ok = CheckedResult::success(42u8);
/// assert!(ok.is_valid());
/// assert_eq!(ok.value(), 42);
///
/// let bad = CheckedResult::<u8>::failure(FailureKind::Overflow, "sum exceeds u8::MAX");
/// assert!(!bad.is_valid());
/// assert_eq!(bad, FailureKind::Overflow);
/// assert_eq!(bad.message(), "sum exceeds u8::MAX");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckedResult<R> {
    repr: Repr<R>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<R> {
    Value(R),
    Failure(Failure),
}

impl<R> CheckedResult<R> {
    /// Creates a successful result holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// const FIVE: CheckedResult<i32> = CheckedResult::success(5);
    /// assert_eq!(FIVE.value(), 5);
    /// ```
    #[inline(always)]
    pub const fn success(value: R) -> Self {
        Self {
            repr: Repr::Value(value),
        }
    }

    /// Creates a failed result of category `kind` with a fixed diagnostic
    /// message.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is `FailureKind::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// # use safenum_core::num::failure::FailureKind;
    /// let r = CheckedResult::<i64>::failure(FailureKind::Domain, "division by zero");
    /// assert_eq!(r.kind(), FailureKind::Domain);
    /// ```
    #[inline]
    pub const fn failure(kind: FailureKind, message: &'static str) -> Self {
        Self {
            repr: Repr::Failure(Failure::new(kind, message)),
        }
    }

    /// Creates a failed result from an existing `Failure`.
    #[inline(always)]
    pub const fn from_failure(failure: Failure) -> Self {
        Self {
            repr: Repr::Failure(failure),
        }
    }

    /// Returns `true` if the result holds a value.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        matches!(self.repr, Repr::Value(_))
    }

    /// Returns the category of the result; `FailureKind::None` on success.
    #[inline(always)]
    pub const fn kind(&self) -> FailureKind {
        match &self.repr {
            Repr::Value(_) => FailureKind::None,
            Repr::Failure(failure) => failure.kind(),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[inline]
    pub const fn value(&self) -> R
    where
        R: Copy,
    {
        match &self.repr {
            Repr::Value(value) => *value,
            Repr::Failure(_) => panic!("called `CheckedResult::value()` on a failed result"),
        }
    }

    /// Consumes the result and returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with the diagnostic message if the result is a failure.
    #[inline]
    pub fn into_value(self) -> R {
        match self.repr {
            Repr::Value(value) => value,
            Repr::Failure(failure) => panic!(
                "called `CheckedResult::into_value()` on a failed result: {}: {}",
                failure.kind(),
                failure.message()
            ),
        }
    }

    /// Returns the diagnostic message.
    ///
    /// # Panics
    ///
    /// Panics if the result holds a value.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match &self.repr {
            Repr::Value(_) => panic!("called `CheckedResult::message()` on a successful result"),
            Repr::Failure(failure) => failure.message(),
        }
    }

    /// Returns a reference to the held value, or `None` on failure.
    #[inline(always)]
    pub const fn as_value(&self) -> Option<&R> {
        match &self.repr {
            Repr::Value(value) => Some(value),
            Repr::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure payload, or `None` on success.
    #[inline(always)]
    pub const fn as_failure(&self) -> Option<&Failure> {
        match &self.repr {
            Repr::Value(_) => None,
            Repr::Failure(failure) => Some(failure),
        }
    }

    /// Converts into an `Option` holding the value, discarding any failure.
    #[inline]
    pub fn ok(self) -> Option<R> {
        match self.repr {
            Repr::Value(value) => Some(value),
            Repr::Failure(_) => None,
        }
    }

    /// Converts into an `Option` holding the failure, discarding any value.
    #[inline]
    pub fn err(self) -> Option<Failure> {
        match self.repr {
            Repr::Value(_) => None,
            Repr::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a standard `Result`, so failures can be propagated
    /// with `?`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// # use safenum_core::num::failure::{Failure, FailureKind};
    /// fn halve(r: CheckedResult<u32>) -> Result<u32, Failure> {
    ///     Ok(r.into_result()? / 2)
    /// }
    ///
    /// assert_eq!(halve(CheckedResult::success(10)), Ok(5));
    /// let err = halve(CheckedResult::failure(FailureKind::Overflow, "too big")).unwrap_err();
    /// assert_eq!(err.kind(), FailureKind::Overflow);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, Failure> {
        match self.repr {
            Repr::Value(value) => Ok(value),
            Repr::Failure(failure) => Err(failure),
        }
    }

    /// Creates a result from a standard `Result`, the inverse of
    /// `into_result`.
    #[inline]
    pub fn from_result(result: Result<R, Failure>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(failure) => Self::from_failure(failure),
        }
    }

    /// Maps the held value with `f`. A failure passes through unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> CheckedResult<U>
    where
        F: FnOnce(R) -> U,
    {
        match self.repr {
            Repr::Value(value) => CheckedResult::success(f(value)),
            Repr::Failure(failure) => CheckedResult::from_failure(failure),
        }
    }
}

impl<R> From<R> for CheckedResult<R> {
    #[inline(always)]
    fn from(value: R) -> Self {
        Self::success(value)
    }
}

impl<R> From<CheckedResult<R>> for Result<R, Failure> {
    #[inline(always)]
    fn from(result: CheckedResult<R>) -> Self {
        result.into_result()
    }
}

impl<R> PartialEq<FailureKind> for CheckedResult<R> {
    #[inline(always)]
    fn eq(&self, other: &FailureKind) -> bool {
        self.kind() == *other
    }
}

impl<R> PartialEq<CheckedResult<R>> for FailureKind {
    #[inline(always)]
    fn eq(&self, other: &CheckedResult<R>) -> bool {
        *self == other.kind()
    }
}

impl<R> std::fmt::Debug for CheckedResult<R>
where
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Value(value) => f.debug_tuple("Success").field(value).finish(),
            Repr::Failure(failure) => std::fmt::Debug::fmt(failure, f),
        }
    }
}

impl<R> std::fmt::Display for CheckedResult<R>
where
    R: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Value(value) => std::fmt::Display::fmt(value, f),
            Repr::Failure(failure) => f.pad(failure.message()),
        }
    }
}

/// Parsing always targets the value slot; a malformed input is reported as
/// `R`'s own parse error, never as a failure category.
impl<R> FromStr for CheckedResult<R>
where
    R: FromStr,
{
    type Err = R::Err;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::success)
    }
}
