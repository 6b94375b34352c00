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

//! Failure dispatch
//!
//! Defines the `ExceptionPolicy` trait, the capability contract a caller
//! supplies to decide what a failed `CheckedResult` means, and the
//! `dispatch` routing from `FailureKind` to the matching handler.
//!
//! Components
//! - `panic`: fail-terminal; panics with the category and message.
//! - `ignore`: zero-overhead placeholder.
//! - `log`: emits a `tracing` event per failure.
//! - `record`: stores every dispatched failure for later inspection.
//! - `composite`: fan-out policy; forwards to children in insertion order.
//!
//! Notes
//! - Handlers take `&mut self` and receive the `'static` diagnostic text.
//! - Dispatch is a one-way handoff; it never inspects what a handler did.
//! - `FailureKind::None` and `FailureKind::Uninitialized` invoke no handler.

use crate::num::checked_result::CheckedResult;
use crate::num::failure::{Failure, FailureKind};

pub mod composite;
pub mod ignore;
pub mod log;
pub mod panic;
pub mod record;

/// Handlers for the four reportable failure categories.
///
/// A conforming policy must handle all four; several may share one
/// implementation. Handlers may diverge (panic, abort) or return normally
/// (log, record, saturate).
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::checked_result::CheckedResult;
/// # use safenum_core::num::failure::FailureKind;
/// # use safenum_core::policy::ExceptionPolicy;
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl ExceptionPolicy for Count {
///     fn overflow_error(&mut self, _message: &'static str) { self.0 += 1; }
///     fn underflow_error(&mut self, _message: &'static str) { self.0 += 1; }
///     fn range_error(&mut self, _message: &'static str) { self.0 += 1; }
///     fn domain_error(&mut self, _message: &'static str) { self.0 += 1; }
/// }
///
/// let mut count = Count::default();
/// CheckedResult::<u8>::failure(FailureKind::Domain, "division by zero").dispatch(&mut count);
/// CheckedResult::success(1u8).dispatch(&mut count);
/// assert_eq!(count.0, 1);
/// ```
pub trait ExceptionPolicy {
    /// A short name for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called for `FailureKind::Overflow`.
    fn overflow_error(&mut self, message: &'static str);

    /// Called for `FailureKind::Underflow`.
    fn underflow_error(&mut self, message: &'static str);

    /// Called for `FailureKind::Range`.
    fn range_error(&mut self, message: &'static str);

    /// Called for `FailureKind::Domain`.
    fn domain_error(&mut self, message: &'static str);
}

impl<P> ExceptionPolicy for &mut P
where
    P: ExceptionPolicy + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn overflow_error(&mut self, message: &'static str) {
        (**self).overflow_error(message)
    }

    #[inline(always)]
    fn underflow_error(&mut self, message: &'static str) {
        (**self).underflow_error(message)
    }

    #[inline(always)]
    fn range_error(&mut self, message: &'static str) {
        (**self).range_error(message)
    }

    #[inline(always)]
    fn domain_error(&mut self, message: &'static str) {
        (**self).domain_error(message)
    }
}

impl<P> ExceptionPolicy for Box<P>
where
    P: ExceptionPolicy + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn overflow_error(&mut self, message: &'static str) {
        (**self).overflow_error(message)
    }

    #[inline(always)]
    fn underflow_error(&mut self, message: &'static str) {
        (**self).underflow_error(message)
    }

    #[inline(always)]
    fn range_error(&mut self, message: &'static str) {
        (**self).range_error(message)
    }

    #[inline(always)]
    fn domain_error(&mut self, message: &'static str) {
        (**self).domain_error(message)
    }
}

impl std::fmt::Debug for dyn ExceptionPolicy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExceptionPolicy({})", self.name())
    }
}

impl std::fmt::Display for dyn ExceptionPolicy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExceptionPolicy({})", self.name())
    }
}

/// Routes `failure` to the handler of `policy` matching its category.
///
/// `FailureKind::Uninitialized` invokes no handler.
#[inline]
pub fn dispatch_failure<P>(failure: &Failure, policy: &mut P)
where
    P: ExceptionPolicy + ?Sized,
{
    let message = failure.message();
    match failure.kind() {
        FailureKind::Overflow => policy.overflow_error(message),
        FailureKind::Underflow => policy.underflow_error(message),
        FailureKind::Range => policy.range_error(message),
        FailureKind::Domain => policy.domain_error(message),
        FailureKind::None | FailureKind::Uninitialized => {}
    }
}

/// Routes a failed `result` to `policy`. A successful result is a no-op.
/// See [`CheckedResult::dispatch`].
#[inline]
pub fn dispatch<R, P>(result: &CheckedResult<R>, policy: &mut P)
where
    P: ExceptionPolicy + ?Sized,
{
    result.dispatch(policy)
}

impl<R> CheckedResult<R> {
    /// Hands a failure over to `policy`, invoking exactly one handler
    /// selected by the category. Does nothing for a successful result or
    /// for `FailureKind::Uninitialized`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// # use safenum_core::num::failure::FailureKind;
    /// # use safenum_core::policy::record::RecordPolicy;
    /// let mut policy = RecordPolicy::new();
    /// CheckedResult::<i32>::failure(FailureKind::Underflow, "too small").dispatch(&mut policy);
    /// assert_eq!(policy.count(FailureKind::Underflow), 1);
    /// assert_eq!(policy.failures()[0].message(), "too small");
    /// ```
    #[inline]
    pub fn dispatch<P>(&self, policy: &mut P)
    where
        P: ExceptionPolicy + ?Sized,
    {
        if let Some(failure) = self.as_failure() {
            dispatch_failure(failure, policy);
        }
    }

    /// Dispatches to a freshly constructed, default policy. Intended for
    /// stateless policies such as `PanicPolicy`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// # use safenum_core::num::checked_result::CheckedResult;
    /// # use safenum_core::num::failure::FailureKind;
    /// # use safenum_core::policy::panic::PanicPolicy;
    /// CheckedResult::<u8>::failure(FailureKind::Overflow, "too big").dispatch_with::<PanicPolicy>();
    /// ```
    #[inline]
    pub fn dispatch_with<P>(&self)
    where
        P: ExceptionPolicy + Default,
    {
        self.dispatch(&mut P::default());
    }
}
