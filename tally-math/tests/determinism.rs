use tally_math::{sum, sum_iter, RangeViolation, RangeViolationKind};

// Fixed scenarios for the i32 entry point. Each one pins either the exact
// result or the exact violation (direction, index, running sum).

#[test]
fn test_single_integer_returns_the_integer() {
    let one_integer = [42];
    assert_eq!(sum(Some(&one_integer)), Ok(42), "single int should sum to itself");
}

#[test]
fn test_two_integers_return_their_sum() {
    let tuple = [6, 9];
    assert_eq!(sum(Some(&tuple)), Ok(15), "(6, 9) should sum to 15");
}

#[test]
fn test_empty_and_missing_sum_to_zero() {
    let empty: [i32; 0] = [];
    assert_eq!(sum(Some(&empty)), Ok(0), "empty slice should sum to zero");
    assert_eq!(sum(None), Ok(0), "missing slice should sum to zero");
}

#[test]
fn test_sum_above_max_overflows() {
    let values = [i32::MAX - 5, 3, 3];
    let err = sum(Some(&values)).expect_err("sum above i32::MAX must fail");

    assert_eq!(err.kind(), RangeViolationKind::Overflow);
    assert_eq!(
        err,
        RangeViolation::Overflow {
            index: 2,
            partial: 2_147_483_648,
            max: 2_147_483_647,
        }
    );
}

#[test]
fn test_sum_below_min_underflows() {
    let values = [i32::MIN, -1];
    let err = sum(Some(&values)).expect_err("sum below i32::MIN must fail");

    assert_eq!(
        err,
        RangeViolation::Underflow {
            index: 1,
            partial: -2_147_483_649,
            min: -2_147_483_648,
        }
    );
}

#[test]
fn test_exact_bounds_do_not_fail() {
    assert_eq!(sum(Some(&[i32::MAX - 5, 3, 2])), Ok(i32::MAX));
    assert_eq!(sum(Some(&[i32::MIN + 5, -3, -2])), Ok(i32::MIN));
    assert_eq!(sum(Some(&[i32::MAX, i32::MIN, i32::MAX, i32::MIN])), Ok(-2));
}

#[test]
fn test_running_sum_checked_at_every_step() {
    // The final total is back in range, but the second prefix is not.
    let values = [i32::MAX, i32::MAX, -i32::MAX];
    let err = sum(Some(&values)).unwrap_err();
    assert_eq!(err.kind(), RangeViolationKind::Overflow);
    assert_eq!(err.index(), 1);
    assert_eq!(err.partial(), 2 * i32::MAX as i128);
}

#[test]
fn test_repeated_calls_agree() {
    let ok = [1, 2, 3, -4];
    assert_eq!(sum(Some(&ok)), sum(Some(&ok)));

    let bad = [i32::MIN, -1];
    assert_eq!(sum(Some(&bad)), sum(Some(&bad)));
}

#[test]
fn test_slice_and_iterator_entry_points_agree() {
    let values = vec![7, -3, 1_000_000, i32::MAX - 1_000_004];
    assert_eq!(sum(Some(values.as_slice())), sum_iter(values.iter().copied()));
    assert_eq!(sum_iter(values), Ok(i32::MAX));
}
