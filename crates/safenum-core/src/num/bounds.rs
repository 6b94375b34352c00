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

//! Numeric bounds for `CheckedResult<R>`.
//!
//! Generic code that queries bounds through `num_traits::Bounded` works the
//! same whether it is instantiated with a raw numeric type or with a
//! `CheckedResult` of it: the bounds of `CheckedResult<R>` are the bounds of
//! `R`, wrapped as successful results.

use crate::num::checked_result::CheckedResult;
use num_traits::Bounded;

impl<R> Bounded for CheckedResult<R>
where
    R: Bounded,
{
    #[inline(always)]
    fn min_value() -> Self {
        Self::success(R::min_value())
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::success(R::max_value())
    }
}

/// Returns the smallest value of `R` as a successful result.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::bounds::minimum_of;
/// # use safenum_core::num::checked_result::CheckedResult;
/// assert_eq!(minimum_of::<i8>(), CheckedResult::success(i8::MIN));
/// assert_eq!(minimum_of::<u32>(), CheckedResult::success(0));
/// ```
#[inline(always)]
pub fn minimum_of<R>() -> CheckedResult<R>
where
    R: Bounded,
{
    CheckedResult::success(R::min_value())
}

/// Returns the largest value of `R` as a successful result.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::bounds::maximum_of;
/// # use safenum_core::num::checked_result::CheckedResult;
/// assert_eq!(maximum_of::<i8>(), CheckedResult::success(i8::MAX));
/// assert_eq!(maximum_of::<u32>(), CheckedResult::success(u32::MAX));
/// ```
#[inline(always)]
pub fn maximum_of<R>() -> CheckedResult<R>
where
    R: Bounded,
{
    CheckedResult::success(R::max_value())
}

macro_rules! impl_const_bounds_for {
    ($t:ty) => {
        impl CheckedResult<$t> {
            /// The smallest value of the wrapped type, as a successful result.
            pub const MIN: Self = Self::success(<$t>::MIN);
            /// The largest value of the wrapped type, as a successful result.
            pub const MAX: Self = Self::success(<$t>::MAX);
        }
    };
}

impl_const_bounds_for!(u8);
impl_const_bounds_for!(u16);
impl_const_bounds_for!(u32);
impl_const_bounds_for!(u64);
impl_const_bounds_for!(usize);
impl_const_bounds_for!(u128);

impl_const_bounds_for!(i8);
impl_const_bounds_for!(i16);
impl_const_bounds_for!(i32);
impl_const_bounds_for!(i64);
impl_const_bounds_for!(isize);
impl_const_bounds_for!(i128);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::failure::FailureKind;

    fn span<T: Bounded>() -> (T, T) {
        (T::min_value(), T::max_value())
    }

    #[test]
    fn test_bounded_signed() {
        let (lo, hi) = span::<CheckedResult<i16>>();
        assert_eq!(lo, CheckedResult::success(i16::MIN));
        assert_eq!(hi, CheckedResult::success(i16::MAX));
        assert!(lo.is_valid() && hi.is_valid());
    }

    #[test]
    fn test_bounded_unsigned() {
        let (lo, hi) = span::<CheckedResult<u64>>();
        assert_eq!(lo, CheckedResult::success(0));
        assert_eq!(hi, CheckedResult::success(u64::MAX));
    }

    #[test]
    fn test_bounded_matches_raw() {
        let (raw_lo, raw_hi) = span::<i128>();
        let (lo, hi) = span::<CheckedResult<i128>>();
        assert_eq!(lo.value(), raw_lo);
        assert_eq!(hi.value(), raw_hi);
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(minimum_of::<i32>(), CheckedResult::success(i32::MIN));
        assert_eq!(maximum_of::<i32>(), CheckedResult::success(i32::MAX));
        assert_eq!(minimum_of::<u8>(), CheckedResult::success(u8::MIN));
        assert_eq!(maximum_of::<u8>(), CheckedResult::success(u8::MAX));
        assert_eq!(maximum_of::<u8>().kind(), FailureKind::None);
    }

    #[test]
    fn test_float_bounds() {
        assert_eq!(minimum_of::<f64>().value(), f64::MIN);
        assert_eq!(maximum_of::<f64>().value(), f64::MAX);
    }

    #[test]
    fn test_associated_consts() {
        const LO: CheckedResult<isize> = CheckedResult::<isize>::MIN;
        const HI: CheckedResult<usize> = CheckedResult::<usize>::MAX;
        assert_eq!(LO, minimum_of::<isize>());
        assert_eq!(HI, maximum_of::<usize>());
        assert_eq!(
            CheckedResult::<i8>::MIN.min(CheckedResult::<i8>::MAX),
            CheckedResult::<i8>::MIN
        );
    }
}
