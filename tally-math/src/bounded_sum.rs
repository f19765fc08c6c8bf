use core::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::summand::Summand;

/// Direction in which a running sum left the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeViolationKind {
    Overflow,
    Underflow,
}

impl fmt::Display for RangeViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolationKind::Overflow => f.write_str("overflow"),
            RangeViolationKind::Underflow => f.write_str("underflow"),
        }
    }
}

/// A running sum left the range of the result type.
///
/// `index` is the zero-based position of the element whose addition crossed
/// the bound, `partial` is the running sum right after that addition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeViolation {
    #[error("Sum overflowed at index {index}: running sum {partial} exceeds maximum {max}")]
    Overflow { index: usize, partial: i128, max: i128 },
    #[error("Sum underflowed at index {index}: running sum {partial} is below minimum {min}")]
    Underflow { index: usize, partial: i128, min: i128 },
}

impl RangeViolation {
    pub fn kind(&self) -> RangeViolationKind {
        match self {
            RangeViolation::Overflow { .. } => RangeViolationKind::Overflow,
            RangeViolation::Underflow { .. } => RangeViolationKind::Underflow,
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            RangeViolation::Overflow { index, .. } | RangeViolation::Underflow { index, .. } => {
                index
            }
        }
    }

    pub fn partial(&self) -> i128 {
        match *self {
            RangeViolation::Overflow { partial, .. }
            | RangeViolation::Underflow { partial, .. } => partial,
        }
    }
}

/// Sum a slice of `i32`, failing on the first running sum outside `i32`.
///
/// A missing slice sums to zero, the same as an empty one.
///
/// ```rust
/// # use tally_math::{sum, RangeViolationKind};
/// assert_eq!(sum(Some(&[6, 9])), Ok(15));
/// assert_eq!(sum(None), Ok(0));
///
/// let err = sum(Some(&[i32::MIN, -1])).unwrap_err();
/// assert_eq!(err.kind(), RangeViolationKind::Underflow);
/// ```
pub fn sum(values: Option<&[i32]>) -> Result<i32, RangeViolation> {
    match values {
        Some(values) => bounded_sum(values.iter().copied()),
        None => Ok(0),
    }
}

/// Same as [`sum`], over any sequence of `i32`.
///
/// The iterator is consumed only up to the first violating element.
pub fn sum_iter<I>(values: I) -> Result<i32, RangeViolation>
where
    I: IntoIterator<Item = i32>,
{
    bounded_sum(values)
}

/// Checked sum for any [`Summand`].
///
/// The range is checked after every addition, not only at the end: a
/// sequence whose running sum leaves the range and later comes back
/// (e.g. `[MAX, MAX, -MAX]`) still fails at the first crossing.
pub fn bounded_sum<T, I>(values: I) -> Result<T, RangeViolation>
where
    T: Summand,
    I: IntoIterator<Item = T>,
{
    let mut acc = T::WIDE_ZERO;
    let mut count = 0usize;

    for (index, value) in values.into_iter().enumerate() {
        acc = acc + value.widen();
        count = index + 1;

        if acc > T::WIDE_MAX {
            return Err(violation(RangeViolation::Overflow {
                index,
                partial: T::wide_to_i128(acc),
                max: T::wide_to_i128(T::WIDE_MAX),
            }));
        } else if acc < T::WIDE_MIN {
            return Err(violation(RangeViolation::Underflow {
                index,
                partial: T::wide_to_i128(acc),
                min: T::wide_to_i128(T::WIDE_MIN),
            }));
        }
    }

    trace!(count, sum = %T::wide_to_i128(acc), "bounded sum completed");
    Ok(T::narrow(acc))
}

fn violation(err: RangeViolation) -> RangeViolation {
    debug!(
        index = err.index(),
        partial = %err.partial(),
        kind = %err.kind(),
        "bounded sum left the representable range"
    );
    err
}

/// Iterator adapter for [`bounded_sum`].
///
/// ```rust
/// # use tally_math::BoundedSumExt;
/// let total = [1i16, 2, 3].into_iter().bounded_sum();
/// assert_eq!(total, Ok(6));
/// ```
pub trait BoundedSumExt: Iterator + Sized
where
    Self::Item: Summand,
{
    fn bounded_sum(self) -> Result<Self::Item, RangeViolation> {
        bounded_sum(self)
    }
}

impl<I> BoundedSumExt for I
where
    I: Iterator,
    I::Item: Summand,
{
}
