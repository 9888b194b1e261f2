use super::*;
use crate::underlying::{Sealed, const_of_u64};

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// The smallest value, `0`.
  //
  // Represented by the bit pattern `0b000...0` in either orientation.
  pub const MIN: Self = Self::from_word(<UintFor<P>>::ZERO);

  /// The largest value, `2 - 2^-(P-1)`.
  //
  // Represented by the bit pattern `0b111...1` (the lowest `P` bits) in either orientation.
  pub const MAX: Self = Self::from_word(Self::MASK);

  /// The smallest non-zero value, `2^-(P-1)`, i.e. the Direct word `0b000...1`.
  //
  // Represented by the bit pattern `0b000...1` if Direct, `0b100...0` if Reversed.
  pub const EPSILON: Self = {
    let lsb = if O::REVERSED { 1 << (Self::BITS - 1) } else { 1 };
    Self::from_word(const_of_u64(lsb))
  };
}
