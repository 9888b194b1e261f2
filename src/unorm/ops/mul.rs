use super::*;

use crate::underlying::Sealed;

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// `self × other`, wrapping around `P` bits.
  ///
  /// Multiplication is native on Reversed words: a single machine multiply of the two stored
  /// words, keeping the lowest `P` bits of the product. A Direct unorm mirrors both words,
  /// multiplies them, and mirrors the product back.
  ///
  /// Note this is *not* the fixed-point product of the two values. In the mirrored layout the
  /// lowest bits of the machine word are the most significant digits of the value, so the kept
  /// half of the machine product is built from the leading digits of both operands, with carries
  /// running towards the less significant digits. It is a cheap approximation whose quality is
  /// what the benchmarks measure.
  pub(crate) fn mul(self, other: Self) -> Self {
    self.in_domain::<Reversed>(other, <UintFor<P> as Sealed>::wrapping_mul)
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
