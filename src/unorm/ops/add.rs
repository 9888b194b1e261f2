use super::*;

use crate::underlying::Sealed;

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// `self + other`, wrapping around `P` bits.
  ///
  /// Addition is native on Direct words (where carries run from the lsb towards the msb of the
  /// value, just like for machine integers). A Reversed unorm mirrors both words, adds them, and
  /// mirrors the sum back.
  pub(crate) fn add(self, other: Self) -> Self {
    self.in_domain::<Direct>(other, <UintFor<P> as Sealed>::wrapping_add)
  }

  /// `self - other`, wrapping around `P` bits.
  ///
  /// Like [`add`](Self::add), subtraction is native on Direct words.
  ///
  /// With the `compat-sub` feature, subtracting a Direct unorm *adds* instead, which is how
  /// earlier versions of this type behaved. Reversed unorms always subtract.
  pub(crate) fn sub(self, other: Self) -> Self {
    if const { cfg!(feature = "compat-sub") && !O::REVERSED } {
      return self.add(other)
    }
    self.in_domain::<Direct>(other, <UintFor<P> as Sealed>::wrapping_sub)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
