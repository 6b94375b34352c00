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
use crate::policy::ExceptionPolicy;

/// A policy that returns normally and remembers every failure it is handed,
/// in dispatch order.
///
/// Useful when a computation should run to completion and report its
/// failures afterwards, and as a probe in tests.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::checked_result::CheckedResult;
/// # use safenum_core::num::failure::FailureKind;
/// # use safenum_core::policy::record::RecordPolicy;
/// let mut policy = RecordPolicy::new();
/// for r in [
///     CheckedResult::success(1u8),
///     CheckedResult::failure(FailureKind::Overflow, "a"),
///     CheckedResult::failure(FailureKind::Overflow, "b"),
/// ] {
///     r.dispatch(&mut policy);
/// }
/// assert_eq!(policy.len(), 2);
/// assert_eq!(policy.count(FailureKind::Overflow), 2);
/// assert_eq!(policy.last().map(|f| f.message()), Some("b"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RecordPolicy {
    failures: Vec<Failure>,
}

impl RecordPolicy {
    /// Creates a new, empty `RecordPolicy`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Creates a new `RecordPolicy` with room for `capacity` failures.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            failures: Vec::with_capacity(capacity),
        }
    }

    /// Returns the recorded failures in dispatch order.
    #[inline(always)]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns the most recently recorded failure.
    #[inline(always)]
    pub fn last(&self) -> Option<&Failure> {
        self.failures.last()
    }

    /// Returns the number of recorded failures of category `kind`.
    #[inline]
    pub fn count(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind() == kind).count()
    }

    /// Returns the number of recorded failures.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Forgets all recorded failures.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.failures.clear();
    }

    /// Consumes the policy and returns the recorded failures.
    #[inline(always)]
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }
}

impl ExceptionPolicy for RecordPolicy {
    #[inline(always)]
    fn name(&self) -> &str {
        "RecordPolicy"
    }

    #[inline]
    fn overflow_error(&mut self, message: &'static str) {
        self.failures.push(Failure::new(FailureKind::Overflow, message));
    }

    #[inline]
    fn underflow_error(&mut self, message: &'static str) {
        self.failures.push(Failure::new(FailureKind::Underflow, message));
    }

    #[inline]
    fn range_error(&mut self, message: &'static str) {
        self.failures.push(Failure::new(FailureKind::Range, message));
    }

    #[inline]
    fn domain_error(&mut self, message: &'static str) {
        self.failures.push(Failure::new(FailureKind::Domain, message));
    }
}
