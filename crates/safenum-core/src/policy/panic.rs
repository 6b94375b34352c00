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

use crate::num::failure::FailureKind;
use crate::policy::ExceptionPolicy;

/// A fail-terminal policy: every reported failure panics with the category
/// and diagnostic message, e.g. `"overflow error: sum exceeds u8::MAX"`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PanicPolicy {
    _private: (),
}

impl PanicPolicy {
    /// Creates a new `PanicPolicy`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn fail(kind: FailureKind, message: &'static str) -> ! {
    panic!("{}: {}", kind, message)
}

impl ExceptionPolicy for PanicPolicy {
    #[inline(always)]
    fn name(&self) -> &str {
        "PanicPolicy"
    }

    fn overflow_error(&mut self, message: &'static str) {
        fail(FailureKind::Overflow, message)
    }

    fn underflow_error(&mut self, message: &'static str) {
        fail(FailureKind::Underflow, message)
    }

    fn range_error(&mut self, message: &'static str) {
        fail(FailureKind::Range, message)
    }

    fn domain_error(&mut self, message: &'static str) {
        fail(FailureKind::Domain, message)
    }
}
