use core::ops::Add;

/// A narrow signed integer paired with a wider accumulator type.
///
/// The accumulator must hold the narrow range plus one more narrow value in
/// either direction, so a running sum that is still in range can absorb the
/// next element without itself overflowing.
pub trait Summand: Copy + Sized {
    /// Accumulator type (at least double the width of `Self`).
    type Wide: Copy + Ord + Add<Output = Self::Wide>;

    const WIDE_ZERO: Self::Wide;
    /// `Self::MIN` in the accumulator type
    const WIDE_MIN: Self::Wide;
    /// `Self::MAX` in the accumulator type
    const WIDE_MAX: Self::Wide;

    /// Lossless widening into the accumulator.
    fn widen(self) -> Self::Wide;

    /// Narrow an accumulator back to `Self`.
    /// Only meaningful for values inside `[WIDE_MIN, WIDE_MAX]`.
    fn narrow(wide: Self::Wide) -> Self;

    /// Accumulator value as `i128`, used for error reporting.
    fn wide_to_i128(wide: Self::Wide) -> i128;
}

macro_rules! summand_impl {
    ($narrow:ty, $wide:ty) => {
        impl Summand for $narrow {
            type Wide = $wide;

            const WIDE_ZERO: $wide = 0;
            const WIDE_MIN: $wide = <$narrow>::MIN as $wide;
            const WIDE_MAX: $wide = <$narrow>::MAX as $wide;

            #[inline(always)]
            fn widen(self) -> $wide {
                <$wide>::from(self)
            }

            #[inline(always)]
            fn narrow(wide: $wide) -> $narrow {
                wide as $narrow
            }

            #[inline(always)]
            fn wide_to_i128(wide: $wide) -> i128 {
                i128::from(wide)
            }
        }
    };
}

summand_impl!(i8, i64);
summand_impl!(i16, i64);
summand_impl!(i32, i64);
summand_impl!(i64, i128);
