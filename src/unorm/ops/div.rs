use super::*;

use crate::{Error, Result};
use crate::underlying::Sealed;

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// `self ÷ other`, or [`Error::DivisionByZero`] if the word of `other` is 0.
  ///
  /// Division is native on Reversed words: a single machine (truncating) division of the two
  /// stored words. A Direct unorm mirrors both words, divides them, and mirrors the quotient
  /// back. Mirroring maps 0 to 0 and nothing else to 0, so the divisor is zero in one orientation
  /// iff it is zero in the other.
  ///
  /// ```
  /// # use unorm::*;
  /// let a = mnorm::<16>::from_bits(42);
  /// assert_eq!(a.checked_div(mnorm::<16>::from_bits(6)), Ok(mnorm::<16>::from_bits(7)));
  /// assert_eq!(a.checked_div(mnorm::<16>::MIN), Err(Error::DivisionByZero));
  /// ```
  #[inline]
  pub fn checked_div(self, other: Self) -> Result<Self> {
    if other.word == <UintFor<P>>::ZERO {
      return Err(Error::DivisionByZero)
    }
    Ok(self.in_domain::<Reversed>(other, |x, y| x / y))
  }

  /// `*self = (*self ÷ other)`, or [`Error::DivisionByZero`] if the word of `other` is 0, in
  /// which case `self` is left untouched.
  #[inline]
  pub fn checked_div_assign(&mut self, other: Self) -> Result<()> {
    *self = self.checked_div(other)?;
    Ok(())
  }

  /// As [`Self::checked_div`], but panics on division by zero. This is what backs the `/` and
  /// `/=` operators.
  ///
  /// # Panics
  ///
  /// If the word of `other` is 0.
  pub(crate) fn div(self, other: Self) -> Self {
    match self.checked_div(other) {
      Ok(quotient) => quotient,
      Err(error) => panic!("{error}"),
    }
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
