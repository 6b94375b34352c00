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

//! Failure-propagating comparison and selection.
//!
//! Ordering two results is only meaningful when both hold a value. When
//! either operand is a failure:
//!
//! - `less_than` answers `false` (not "incomparable"), even for a failure
//!   compared with itself. This is not a strict weak ordering, which is
//!   why `CheckedResult` deliberately does not implement `PartialOrd` or
//!   `Ord`.
//! - `min` and `max` return a fresh `FailureKind::Range` failure carrying
//!   [`COMPARISON_FAILURE_MESSAGE`]. The category and message of the
//!   original failure are not propagated.

use crate::num::checked_result::CheckedResult;
use crate::num::failure::FailureKind;
use std::cmp::Ordering;

/// The diagnostic carried by `min`/`max` when an operand holds no value.
pub const COMPARISON_FAILURE_MESSAGE: &str = "Can't compare values without values";

impl<R> CheckedResult<R>
where
    R: PartialOrd,
{
    /// Returns `true` if both results are valid and `self`'s value is
    /// strictly less than `other`'s. Returns `false` whenever either
    /// operand is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// # use safenum_core::num::failure::FailureKind;
    /// let three = CheckedResult::success(3);
    /// let seven = CheckedResult::success(7);
    /// let bad = CheckedResult::<i32>::failure(FailureKind::Overflow, "too big");
    ///
    /// assert!(three.less_than(&seven));
    /// assert!(!seven.less_than(&three));
    /// assert!(!bad.less_than(&seven));
    /// assert!(!seven.less_than(&bad));
    /// ```
    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        matches!(self.partial_cmp_values(other), Some(Ordering::Less))
    }

    /// Compares the held values. Returns `None` if either result is a
    /// failure, or if the values themselves are unordered.
    #[inline]
    pub fn partial_cmp_values(&self, other: &Self) -> Option<Ordering> {
        match (self.as_value(), other.as_value()) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }

    /// Returns the lesser of two results.
    ///
    /// If both are valid, the one with the smaller value is returned; on a
    /// tie `other` is returned. Otherwise a new `FailureKind::Range`
    /// failure is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// # use safenum_core::num::failure::FailureKind;
    /// let a = CheckedResult::<i32>::failure(FailureKind::Overflow, "too big");
    /// let b = CheckedResult::success(5);
    ///
    /// let m = a.min(b);
    /// assert_eq!(m, FailureKind::Range);
    /// assert_eq!(CheckedResult::success(3).min(CheckedResult::success(7)).value(), 3);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        match self.values_less_than(&other) {
            Some(true) => self,
            Some(false) => other,
            None => Self::comparison_failure(),
        }
    }

    /// Returns the greater of two results.
    ///
    /// If both are valid, the one with the larger value is returned; on a
    /// tie `self` is returned. Otherwise a new `FailureKind::Range` failure
    /// is returned.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        match self.values_less_than(&other) {
            Some(true) => other,
            Some(false) => self,
            None => Self::comparison_failure(),
        }
    }

    #[inline(always)]
    fn values_less_than(&self, other: &Self) -> Option<bool> {
        match (self.as_value(), other.as_value()) {
            (Some(lhs), Some(rhs)) => Some(lhs < rhs),
            _ => None,
        }
    }
}

impl<R> CheckedResult<R> {
    #[inline(always)]
    const fn comparison_failure() -> Self {
        Self::failure(FailureKind::Range, COMPARISON_FAILURE_MESSAGE)
    }
}

/// Returns the lesser of two results. See [`CheckedResult::min`].
#[inline]
pub fn min<R>(lhs: CheckedResult<R>, rhs: CheckedResult<R>) -> CheckedResult<R>
where
    R: PartialOrd,
{
    lhs.min(rhs)
}

/// Returns the greater of two results. See [`CheckedResult::max`].
#[inline]
pub fn max<R>(lhs: CheckedResult<R>, rhs: CheckedResult<R>) -> CheckedResult<R>
where
    R: PartialOrd,
{
    lhs.max(rhs)
}

macro_rules! const_ordering_impl {
    ($t:ty) => {
        impl CheckedResult<$t> {
            /// Const-evaluable counterpart of [`CheckedResult::less_than`].
            #[inline(always)]
            pub const fn less_than_const(&self, other: &Self) -> bool {
                match (self.as_value(), other.as_value()) {
                    (Some(lhs), Some(rhs)) => *lhs < *rhs,
                    _ => false,
                }
            }

            /// Const-evaluable counterpart of [`CheckedResult::min`].
            #[inline(always)]
            pub const fn min_const(self, other: Self) -> Self {
                if !self.is_valid() || !other.is_valid() {
                    return Self::comparison_failure();
                }
                if self.less_than_const(&other) {
                    self
                } else {
                    other
                }
            }

            /// Const-evaluable counterpart of [`CheckedResult::max`].
            #[inline(always)]
            pub const fn max_const(self, other: Self) -> Self {
                if !self.is_valid() || !other.is_valid() {
                    return Self::comparison_failure();
                }
                if self.less_than_const(&other) {
                    other
                } else {
                    self
                }
            }
        }
    };
}

const_ordering_impl!(u8);
const_ordering_impl!(u16);
const_ordering_impl!(u32);
const_ordering_impl!(u64);
const_ordering_impl!(usize);
const_ordering_impl!(u128);

const_ordering_impl!(i8);
const_ordering_impl!(i16);
const_ordering_impl!(i32);
const_ordering_impl!(i64);
const_ordering_impl!(isize);
const_ordering_impl!(i128);
