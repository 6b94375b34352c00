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

//! # Safenum Core
//!
//! The result value returned by every checked arithmetic primitive in the
//! Safenum ecosystem. Instead of panicking or wrapping silently, a checked
//! operation yields a `CheckedResult<R>` that either carries a value of
//! type `R` or a categorized failure with a fixed diagnostic message.
//! What happens to a failure is decided later by an `ExceptionPolicy`
//! supplied by the caller.
//!
//! ## Modules
//!
//! - `num`: The `CheckedResult<R>` container, the `FailureKind` taxonomy,
//!   failure-propagating ordering combinators (`min`, `max`, `less_than`)
//!   and adaptation to `num_traits::Bounded`.
//! - `policy`: The `ExceptionPolicy` trait and its stock implementations
//!   (`PanicPolicy`, `IgnorePolicy`, `LogPolicy`, `RecordPolicy`,
//!   `CompositePolicy`).
//!
//! ## Example
//!
//! ```rust
//! use safenum_core::num::checked_result::CheckedResult;
//! use safenum_core::num::failure::FailureKind;
//! use safenum_core::policy::record::RecordPolicy;
//!
//! let a = CheckedResult::<i32>::failure(FailureKind::Overflow, "too big");
//! let b = CheckedResult::success(5);
//!
//! let smallest = a.min(b);
//! assert_eq!(smallest, FailureKind::Range);
//!
//! let mut policy = RecordPolicy::new();
//! smallest.dispatch(&mut policy);
//! assert_eq!(policy.count(FailureKind::Range), 1);
//! ```

pub mod num;
pub mod policy;
