use super::*;
use crate::underlying::{Sealed, const_of_u64};

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// The precision of this unorm type in bits (i.e. parameter `P`).
  ///
  /// Note: this is the logical size, not necessarily the size of the underlying type.
  pub const BITS: u32 = {
    assert!(
      P >= 1,
      "A unorm cannot have fewer than 1 bit",
    );
    assert!(
      P <= <UintFor<P>>::BITS,
      "Cannot represent a P-bit unorm with an underlying machine type with fewer bits.",
    );
    P
  };

  /// When representing a `P`-bit unorm in a machine type whose width is `W`, the leftmost
  /// `W - P` bits are junk, and are always kept at 0. This mask has the lowest `P` bits set.
  pub(crate) const MASK: UintFor<P> = const_of_u64(u64::MAX >> (64 - Self::BITS));

  /// Build a unorm straight from its word. The word is kept as is (no reversal), so it must
  /// already be in `O`'s bit order.
  #[inline]
  pub(crate) const fn from_word(word: UintFor<P>) -> Self {
    Self { word, orientation: PhantomData }
  }

  /// Mirror a word across the `P`-bit field, dropping any bits above it.
  #[inline]
  pub(crate) fn mirror(word: UintFor<P>) -> UintFor<P> {
    word.reverse_low(Self::BITS)
  }

  /// Convert a word between the Direct bit order and `O`'s bit order (the conversion is its own
  /// inverse). Bits above the `P`-bit field are dropped.
  #[inline]
  pub(crate) fn orient(word: UintFor<P>) -> UintFor<P> {
    if const { O::REVERSED } {
      Self::mirror(word)
    } else {
      word.mask_lsb(Self::BITS)
    }
  }

  /// Construct a unorm from its raw stored word. Bits higher (more significant) than the lowest
  /// `P` ([`Self::BITS`]) bits, if any, are ignored.
  ///
  /// The word is taken in `O`'s bit order; see [`Self::from_direct_bits`] to give it in the
  /// natural bit order instead.
  #[inline]
  pub fn from_bits(bits: UintFor<P>) -> Self {
    Self::from_word(bits & Self::MASK)
  }

  /// Return the raw stored word of `self`, in `O`'s bit order. Bits higher (more significant)
  /// than the lowest `P` ([`Self::BITS`]) bits, if any, are 0.
  #[inline]
  pub const fn to_bits(self) -> UintFor<P> {
    self.word
  }

  /// Construct a unorm from its Direct word (the natural bit order, where the msb of the `P`-bit
  /// field is the units digit), whatever the orientation `O` it will be stored in.
  ///
  /// ```
  /// # use unorm::{anorm, mnorm};
  /// assert_eq!(anorm::<4>::from_direct_bits(0b0011).to_bits(), 0b0011);
  /// assert_eq!(mnorm::<4>::from_direct_bits(0b0011).to_bits(), 0b1100);
  /// ```
  #[inline]
  pub fn from_direct_bits(bits: UintFor<P>) -> Self {
    Self::from_word(Self::orient(bits))
  }

  /// Return the Direct word of `self` (the natural bit order), whatever the orientation `O` it
  /// is stored in.
  #[inline]
  pub fn to_direct_bits(self) -> UintFor<P> {
    Self::orient(self.word)
  }
}
