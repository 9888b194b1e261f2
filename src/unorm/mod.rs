//! This module and its submodules contain the [`Unorm`] type: an unsigned fixed-point number of
//! `P` bits, built straight from the bit layout of an IEEE float, and stored either in the
//! natural bit order ([`Direct`]) or mirrored ([`Reversed`]).
//!
//! The central trick is that every arithmetic operator is carried out as a *single native
//! integer operation* on whichever bit order makes that operation native:
//!
//!   - `+` and `-` are native on [`Direct`] words;
//!   - `*` and `/` are native on [`Reversed`] words.
//!
//! A value stored in the other orientation reverses both operands, does the native operation,
//! and reverses the result back. Bit reversal only ever changes the representation, never the
//! arithmetic. Results wrap around the `P`-bit field like ordinary unsigned integers; nothing
//! saturates.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit P-1**: numbered least significant to most significant, starts at 0.
//!   - **Direct word**: the word of a value as a [`Direct`] unorm would store it, regardless of
//!     the orientation it is actually stored in.

use core::marker::PhantomData;

use crate::underlying::{NarrowestUnsigned, UintFor, Width};

/// An unsigned fixed-point number of `P` bits (`1 ..= 64`), stored in the narrowest machine type
/// that fits ([`UintFor<P>`]), in the bit order given by `O` ([`Direct`] or [`Reversed`]).
///
/// The Direct word `w` of a unorm stands for the value `w / 2^(P-1)`, i.e. the msb of the `P`-bit
/// field is the units digit and the remaining `P-1` bits are the binary fraction. Values
/// constructed from floats in `[0, 2)` are represented (truncated to `P` bits); anything else
/// wraps around.
///
/// Examples:
///
/// ```
/// # use unorm::{Unorm, Direct, Reversed};
/// type Foo = Unorm::<32, Direct>;  // 32 bits, natural bit order, stored in a u32
/// type Bar = Unorm::<12, Reversed>;  // 12 bits, mirrored bit order, stored in a u16
/// ```
pub struct Unorm<
  const P: u32 = 32,
  O: Orientation = Direct,
> where Width<P>: NarrowestUnsigned {
  word: UintFor<P>,
  orientation: PhantomData<O>,
}

/// Which bit order a [`Unorm`] keeps its word in. Fixed per type, not per value.
///
/// This is a *sealed* trait, implemented only by [`Direct`] and [`Reversed`].
pub trait Orientation: sealed::Sealed + 'static {
  /// Whether words are stored mirrored across the `P`-bit field.
  const REVERSED: bool;

  /// Short name of unorms in this orientation, used in [`Debug`](core::fmt::Debug) output.
  const NAME: &'static str;
}

/// Natural bit order: the msb of the `P`-bit field is the most significant digit. Addition and
/// subtraction are native in this orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direct;

/// Mirrored bit order: bit 0 is the most significant digit. Multiplication and division are
/// native in this orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reversed;

impl Orientation for Direct {
  const REVERSED: bool = false;
  const NAME: &'static str = "anorm";
}

impl Orientation for Reversed {
  const REVERSED: bool = true;
  const NAME: &'static str = "mnorm";
}

mod sealed {
  pub trait Sealed {}
  impl Sealed for super::Direct {}
  impl Sealed for super::Reversed {}
}

/// Basics
mod basics;

/// Constants (min, max)
mod consts;

/// Trait implementations
mod traits;

/// Conversions from floats
pub(crate) mod convert;

/// Arithmetic
mod ops;

/// Exact decimal rendering and debug formatting
mod fmt;
