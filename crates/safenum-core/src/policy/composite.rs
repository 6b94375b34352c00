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

//! Policy combinators
//!
//! Provides `CompositePolicy`, a fan-out policy that forwards every failure
//! to its children. This lets you mix logging, recording and a terminal
//! policy without coupling them.
//!
//! Behavior
//! - Failures are forwarded to child policies in insertion order.
//! - A diverging child (e.g. `PanicPolicy`) stops the fan-out; put it last.

use crate::policy::ExceptionPolicy;

/// A policy that aggregates multiple policies and forwards every failure to
/// all of them.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::checked_result::CheckedResult;
/// # use safenum_core::num::failure::FailureKind;
/// # use safenum_core::policy::composite::CompositePolicy;
/// # use safenum_core::policy::log::LogPolicy;
/// # use safenum_core::policy::record::RecordPolicy;
/// let mut record = RecordPolicy::new();
/// {
///     let mut policy = CompositePolicy::new();
///     policy.add_policy(LogPolicy::new());
///     policy.add_policy(&mut record);
///     CheckedResult::<i32>::failure(FailureKind::Domain, "division by zero").dispatch(&mut policy);
/// }
/// assert_eq!(record.count(FailureKind::Domain), 1);
/// ```
pub struct CompositePolicy<'a> {
    policies: Vec<Box<dyn ExceptionPolicy + 'a>>,
}

impl<'a> Default for CompositePolicy<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositePolicy<'a> {
    /// Creates a new empty `CompositePolicy`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Creates a new `CompositePolicy` with room for `capacity` policies.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            policies: Vec::with_capacity(capacity),
        }
    }

    /// Adds a policy to the end of the fan-out.
    #[inline(always)]
    pub fn add_policy<P>(&mut self, policy: P)
    where
        P: ExceptionPolicy + 'a,
    {
        self.policies.push(Box::new(policy));
    }

    /// Adds a boxed policy to the end of the fan-out.
    #[inline(always)]
    pub fn add_policy_boxed(&mut self, policy: Box<dyn ExceptionPolicy + 'a>) {
        self.policies.push(policy);
    }

    /// Returns the child policies.
    #[inline(always)]
    pub fn policies(&self) -> &[Box<dyn ExceptionPolicy + 'a>] {
        &self.policies
    }

    /// Returns the number of child policies.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns `true` if there are no child policies.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn ExceptionPolicy + 'a>> for CompositePolicy<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn ExceptionPolicy + 'a>>>(iter: I) -> Self {
        Self {
            policies: iter.into_iter().collect(),
        }
    }
}

impl<'a> std::fmt::Debug for CompositePolicy<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositePolicy")
            .field("policies", &self.policies)
            .finish()
    }
}

impl<'a> ExceptionPolicy for CompositePolicy<'a> {
    fn name(&self) -> &str {
        "CompositePolicy"
    }

    fn overflow_error(&mut self, message: &'static str) {
        for policy in self.policies.iter_mut() {
            policy.overflow_error(message);
        }
    }

    fn underflow_error(&mut self, message: &'static str) {
        for policy in self.policies.iter_mut() {
            policy.underflow_error(message);
        }
    }

    fn range_error(&mut self, message: &'static str) {
        for policy in self.policies.iter_mut() {
            policy.range_error(message);
        }
    }

    fn domain_error(&mut self, message: &'static str) {
        for policy in self.policies.iter_mut() {
            policy.domain_error(message);
        }
    }
}
