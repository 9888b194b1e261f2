//! This module contains the underlying machine integer and float plumbing needed by [`Unorm`]:
//! bit reversal, the selection of the narrowest unsigned type for a given width, and the
//! decomposition of IEEE floats into significand and exponent. These are hidden from the
//! end-user, which only sees the sealed [`Uint`] and [`Float`] traits.
//!
//! [`Unorm`]: crate::Unorm

/// The trait for the underlying machine integer types that can hold the word of a
/// [`Unorm`](crate::Unorm) (only satisfied by `u8`, `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Uint: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::Not<Output=Self> +
  core::ops::Div<Output=Self> +
  Into<u64>
{
  const ZERO: Self;
  const ONE: Self;
  const MAX: Self;
  const BITS: u32;

  /// Short for `x as uX`, i.e. keeps the lowest `Self::BITS` bits of `x`.
  fn of_u64(x: u64) -> Self;

  /// Reverse the order of all `Self::BITS` bits.
  fn reverse(self) -> Self;

  /// Mirror the lowest `n` bits across the `n`-bit field; bits more significant than `n` are
  /// dropped, so the result always has them set to 0.
  ///
  /// ```ignore
  /// assert_eq!(0b0000_0011_u8.reverse_low(4), 0b0000_1100_u8)
  /// ```
  ///
  /// `n` has to be in `1 ..= Self::BITS`.
  fn reverse_low(self, n: u32) -> Self;

  /// Set all bits more significant than `n` to 0.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  ///
  /// `n` has to be in `1 ..= Self::BITS`.
  fn mask_lsb(self, n: u32) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_mul(self, other: Self) -> Self;
}

/// A type-level bit width, used to select the narrowest [`Uint`] that can hold `B` bits via
/// [`NarrowestUnsigned`].
pub struct Width<const B: u32>;

/// Maps a [`Width<B>`] to the smallest of `u8`, `u16`, `u32`, `u64` whose width is at least `B`.
///
/// Only implemented for `Width<1>` through `Width<64>`, so asking for any other width is a
/// compile-time error.
///
/// ```
/// # use unorm::UintFor;
/// let _: UintFor<9> = 0u16;
/// let _: UintFor<32> = 0u32;
/// ```
///
/// ```compile_fail
/// # use unorm::UintFor;
/// let _: UintFor<65> = 0u64;
/// ```
pub trait NarrowestUnsigned {
  type Uint: Uint;
}

/// Short for the narrowest unsigned machine type able to hold `B` bits.
pub type UintFor<const B: u32> = <Width<B> as NarrowestUnsigned>::Uint;

/// The trait for the IEEE float types a [`Unorm`](crate::Unorm) can be constructed from (only
/// satisfied by `f32` and `f64`).
///
/// This is a *sealed* type.
pub trait Float: float::Sealed {}

mod uint;
mod width;
mod float;
mod const_as;
pub mod bitrev;
pub use const_as::const_of_u64;
