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
use tracing::Level;

/// A policy that reports each failure as a `tracing` event and returns
/// normally.
///
/// Events carry the fields `kind` and `diagnostic` and are emitted at the
/// configured level (`WARN` by default). No subscriber is installed by this
/// crate; without one the events are discarded.
///
/// # Examples
///
/// ```rust
/// # use safenum_core::num::checked_result::CheckedResult;
/// # use safenum_core::num::failure::FailureKind;
/// # use safenum_core::policy::log::LogPolicy;
/// let mut policy = LogPolicy::with_level(tracing::Level::ERROR);
/// CheckedResult::<u16>::failure(FailureKind::Range, "not representable").dispatch(&mut policy);
/// assert_eq!(policy.logged(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogPolicy {
    level: Level,
    logged: usize,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl LogPolicy {
    /// Creates a new `LogPolicy` emitting at `WARN`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self::with_level(Level::WARN)
    }

    /// Creates a new `LogPolicy` emitting at `level`.
    #[inline(always)]
    pub const fn with_level(level: Level) -> Self {
        Self { level, logged: 0 }
    }

    /// Returns the level events are emitted at.
    #[inline(always)]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the number of failures reported so far.
    #[inline(always)]
    pub fn logged(&self) -> usize {
        self.logged
    }

    fn log(&mut self, kind: FailureKind, diagnostic: &'static str) {
        self.logged += 1;

        // The `tracing` macros need the level as a constant.
        if self.level == Level::ERROR {
            tracing::error!(%kind, diagnostic, "checked arithmetic failure");
        } else if self.level == Level::WARN {
            tracing::warn!(%kind, diagnostic, "checked arithmetic failure");
        } else if self.level == Level::INFO {
            tracing::info!(%kind, diagnostic, "checked arithmetic failure");
        } else if self.level == Level::DEBUG {
            tracing::debug!(%kind, diagnostic, "checked arithmetic failure");
        } else {
            tracing::trace!(%kind, diagnostic, "checked arithmetic failure");
        }
    }
}

impl ExceptionPolicy for LogPolicy {
    #[inline(always)]
    fn name(&self) -> &str {
        "LogPolicy"
    }

    fn overflow_error(&mut self, message: &'static str) {
        self.log(FailureKind::Overflow, message);
    }

    fn underflow_error(&mut self, message: &'static str) {
        self.log(FailureKind::Underflow, message);
    }

    fn range_error(&mut self, message: &'static str) {
        self.log(FailureKind::Range, message);
    }

    fn domain_error(&mut self, message: &'static str) {
        self.log(FailureKind::Domain, message);
    }
}
