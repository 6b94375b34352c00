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

//! End-to-end use of `CheckedResult` the way a checked arithmetic layer
//! would: produce results, combine them, and decide at the boundary.

use num_traits::Bounded;
use safenum_core::num::checked_result::CheckedResult;
use safenum_core::num::failure::{Failure, FailureKind};
use safenum_core::num::ops::ordering::{max, min};
use safenum_core::policy::composite::CompositePolicy;
use safenum_core::policy::ignore::IgnorePolicy;
use safenum_core::policy::log::LogPolicy;
use safenum_core::policy::record::RecordPolicy;
use safenum_core::policy::ExceptionPolicy;

fn checked_add(a: u8, b: u8) -> CheckedResult<u8> {
    match a.checked_add(b) {
        Some(v) => CheckedResult::success(v),
        None => CheckedResult::failure(FailureKind::Overflow, "addition overflows u8"),
    }
}

fn checked_div(a: u8, b: u8) -> CheckedResult<u8> {
    match a.checked_div(b) {
        Some(v) => CheckedResult::success(v),
        None => CheckedResult::failure(FailureKind::Domain, "division by zero"),
    }
}

/// A generic routine that only knows about `Bounded`.
fn span_of<T>() -> (T, T)
where
    T: Bounded,
{
    (T::min_value(), T::max_value())
}

#[test]
fn min_of_failure_and_success_is_range() {
    let a = CheckedResult::<i32>::failure(FailureKind::Overflow, "too big");
    let b = CheckedResult::success(5);

    let m = min(a, b);
    assert!(!m.is_valid());
    assert_eq!(m.kind(), FailureKind::Range);
    assert_ne!(m.kind(), FailureKind::Overflow);
    assert_eq!(m.message(), "Can't compare values without values");
}

#[test]
fn min_max_of_two_successes() {
    let a = CheckedResult::success(3);
    let b = CheckedResult::success(7);
    assert_eq!(max(a, b), CheckedResult::success(7));
    assert_eq!(min(a, b), CheckedResult::success(3));
}

#[test]
fn successful_pipeline_dispatches_nothing() {
    let mut record = RecordPolicy::new();
    let r = min(checked_add(10, 20), checked_div(100, 4));
    r.dispatch(&mut record);
    assert_eq!(r, CheckedResult::success(25));
    assert!(record.is_empty());
}

#[test]
fn each_category_reaches_its_handler() {
    let cases = [
        (FailureKind::Overflow, "o"),
        (FailureKind::Underflow, "u"),
        (FailureKind::Range, "r"),
        (FailureKind::Domain, "d"),
    ];
    for (kind, message) in cases {
        let mut record = RecordPolicy::new();
        CheckedResult::<i16>::failure(kind, message).dispatch(&mut record);
        assert_eq!(record.failures(), &[Failure::new(kind, message)]);
    }
}

#[test]
fn failures_flow_into_result_and_question_mark() {
    fn average(a: u8, b: u8) -> Result<u8, Failure> {
        let sum = checked_add(a, b).into_result()?;
        checked_div(sum, 2).into()
    }

    assert_eq!(average(10, 20), Ok(15));
    let err = average(200, 100).unwrap_err();
    assert_eq!(err.kind(), FailureKind::Overflow);
    assert_eq!(err.to_string(), "addition overflows u8");
}

#[test]
fn bounds_work_through_generic_code() {
    let (raw_lo, raw_hi) = span_of::<u8>();
    let (lo, hi) = span_of::<CheckedResult<u8>>();
    assert_eq!(lo, CheckedResult::success(raw_lo));
    assert_eq!(hi, CheckedResult::success(raw_hi));
    assert_eq!(
        <CheckedResult<i8> as Bounded>::max_value(),
        CheckedResult::<i8>::MAX
    );
}

#[test]
fn composite_of_stock_policies() {
    let mut record = RecordPolicy::new();
    {
        let mut policy = CompositePolicy::new();
        policy.add_policy(IgnorePolicy::new());
        policy.add_policy(LogPolicy::new());
        policy.add_policy(&mut record);
        assert_eq!(policy.name(), "CompositePolicy");

        let outcome = max(checked_add(250, 10), checked_add(1, 1));
        outcome.dispatch(&mut policy);
        checked_div(1, 0).dispatch(&mut policy);
    }
    assert_eq!(record.count(FailureKind::Range), 1);
    assert_eq!(record.count(FailureKind::Domain), 1);
    assert_eq!(record.count(FailureKind::Overflow), 0);
}
