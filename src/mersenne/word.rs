use core::fmt::Debug;

use num::traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingMul, WrappingSub};

/// Unsigned machine word a Mersenne Twister state is built from
///
/// All arithmetic on state words is modulo 2^BITS, so only the wrapping
/// operations from `num` are used by the generator.
pub trait Word:
    PrimInt + WrappingAdd + WrappingSub + WrappingMul + AsPrimitive<f64> + Debug + 'static
{
    /// Width of the word in bits
    const BITS: usize;

    /// Truncate an index into a word, the way C's implicit conversion does
    fn from_index(i: usize) -> Self;

    /// Word with only the most-significant bit set
    fn msb() -> Self {
        Self::one() << (Self::BITS - 1)
    }

    // x ^ (x >> (w - 2)), shared by both seeding recurrences
    #[inline]
    fn fold(self) -> Self {
        self ^ (self >> (Self::BITS - 2))
    }
}

impl Word for u32 {
    const BITS: usize = 32;

    #[inline]
    fn from_index(i: usize) -> Self {
        i as u32
    }
}

impl Word for u64 {
    const BITS: usize = 64;

    #[inline]
    fn from_index(i: usize) -> Self {
        i as u64
    }
}
