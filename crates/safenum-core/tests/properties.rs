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

use proptest::prelude::*;
use safenum_core::num::bounds::{maximum_of, minimum_of};
use safenum_core::num::checked_result::CheckedResult;
use safenum_core::num::failure::FailureKind;
use safenum_core::num::ops::ordering::{max, min, COMPARISON_FAILURE_MESSAGE};
use safenum_core::policy::record::RecordPolicy;

const MESSAGES: [&str; 4] = ["too big", "too small", "not representable", "undefined"];

fn failure_kind() -> impl Strategy<Value = FailureKind> {
    prop_oneof![
        Just(FailureKind::Overflow),
        Just(FailureKind::Underflow),
        Just(FailureKind::Range),
        Just(FailureKind::Domain),
    ]
}

fn failed() -> impl Strategy<Value = CheckedResult<i32>> {
    (failure_kind(), 0..MESSAGES.len())
        .prop_map(|(kind, idx)| CheckedResult::failure(kind, MESSAGES[idx]))
}

fn any_result() -> impl Strategy<Value = CheckedResult<i32>> {
    prop_oneof![any::<i32>().prop_map(CheckedResult::success), failed()]
}

proptest! {
    #[test]
    fn success_holds_its_value(v in any::<i64>()) {
        let r = CheckedResult::success(v);
        prop_assert!(r.is_valid());
        prop_assert_eq!(r.value(), v);
        prop_assert_eq!(r.kind(), FailureKind::None);
    }

    #[test]
    fn failure_holds_kind_and_message(kind in failure_kind(), idx in 0..MESSAGES.len()) {
        let r = CheckedResult::<u16>::failure(kind, MESSAGES[idx]);
        prop_assert!(!r.is_valid());
        prop_assert_eq!(r.kind(), kind);
        prop_assert_eq!(r.message(), MESSAGES[idx]);
    }

    #[test]
    fn min_max_valid_iff_both_valid(a in any_result(), b in any_result()) {
        let both = a.is_valid() && b.is_valid();
        let lo = min(a, b);
        let hi = max(a, b);
        prop_assert_eq!(lo.is_valid(), both);
        prop_assert_eq!(hi.is_valid(), both);
        if !both {
            prop_assert_eq!(lo.kind(), FailureKind::Range);
            prop_assert_eq!(hi.kind(), FailureKind::Range);
            prop_assert_eq!(lo.message(), COMPARISON_FAILURE_MESSAGE);
            prop_assert_eq!(hi.message(), COMPARISON_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn min_max_pick_by_value(a in any::<i32>(), b in any::<i32>()) {
        let (ra, rb) = (CheckedResult::success(a), CheckedResult::success(b));
        let lo = min(ra, rb);
        let hi = max(ra, rb);
        prop_assert!(lo == ra || lo == rb);
        prop_assert!(hi == ra || hi == rb);
        prop_assert_eq!(lo.value(), a.min(b));
        prop_assert_eq!(hi.value(), a.max(b));
    }

    #[test]
    fn less_than_false_with_any_failure(a in failed(), b in any_result()) {
        prop_assert!(!a.less_than(&b));
        prop_assert!(!b.less_than(&a));
        prop_assert!(!a.less_than(&a));
    }

    #[test]
    fn less_than_matches_values(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(
            CheckedResult::success(a).less_than(&CheckedResult::success(b)),
            a < b
        );
    }

    #[test]
    fn dispatch_reports_exactly_failures(results in proptest::collection::vec(any_result(), 0..32)) {
        let mut policy = RecordPolicy::new();
        for r in &results {
            r.dispatch(&mut policy);
        }
        let expected: Vec<_> = results.iter().filter_map(|r| r.as_failure().copied()).collect();
        prop_assert_eq!(policy.failures(), expected.as_slice());
    }

    #[test]
    fn display_matches_value_or_message(r in any_result()) {
        let rendered = r.to_string();
        match r.as_value() {
            Some(v) => prop_assert_eq!(rendered, v.to_string()),
            None => prop_assert_eq!(rendered, r.message()),
        }
    }

    #[test]
    fn parse_round_trips_success(v in any::<i64>()) {
        let r = CheckedResult::success(v);
        let parsed: CheckedResult<i64> = r.to_string().parse().unwrap();
        prop_assert_eq!(parsed, r);
    }
}

#[test]
fn bounds_for_signed_and_unsigned() {
    assert_eq!(minimum_of::<i32>(), CheckedResult::success(i32::MIN));
    assert_eq!(maximum_of::<i32>(), CheckedResult::success(i32::MAX));
    assert_eq!(minimum_of::<u64>(), CheckedResult::success(u64::MIN));
    assert_eq!(maximum_of::<u64>(), CheckedResult::success(u64::MAX));
}
