//! # tally-math
//!
//! Checked summation of fixed-width signed integers.
//!
//! [`sum`] adds a sequence of `i32` in an `i64` accumulator and checks the
//! running sum against the `i32` range after every element. The first
//! partial sum outside the range aborts with a [`RangeViolation`] naming
//! the direction (overflow or underflow); nothing wraps or saturates.
//!
//! [`bounded_sum`] and [`BoundedSumExt`] expose the same check for every
//! [`Summand`] width (`i8`, `i16`, `i32`, `i64`).

pub mod bounded_sum;
pub mod summand;

pub use bounded_sum::{bounded_sum, sum, sum_iter, BoundedSumExt, RangeViolation, RangeViolationKind};
pub use summand::Summand;
