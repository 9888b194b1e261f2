#![cfg_attr(not(test), no_std)]
//! This crate provides *unorms*: unsigned fixed-point numbers covering the interval `[0, 2)`,
//! whose bit order can be mirrored so that each arithmetic operation becomes a **single native
//! integer instruction**.
//!
//! # Introduction
//!
//! A `P`-bit unorm is built straight from the bit layout of an IEEE float: the top `P` bits of the
//! significand, shifted into place by the exponent. Its word `w` stands for the value
//! `w / 2^(P-1)`. The word is stored in one of two bit orders, fixed per type:
//!
//!   - [`Direct`] (a.k.a. [`anorm`]): the natural order. Addition and subtraction are native.
//!   - [`Reversed`] (a.k.a. [`mnorm`]): mirrored across the `P`-bit field. Multiplication and
//!     division are native.
//!
//! Operations that are not native for a given orientation mirror both operands, perform the
//! native operation, and mirror the result back, so both orientations always compute the same
//! value. Results wrap around the `P`-bit field; nothing saturates, rounds, or fails, except
//! division by zero.
//!
//! The storage is always the narrowest unsigned machine type with at least `P` bits (`u8`, `u16`,
//! `u32`, or `u64`); `P` outside `1 ..= 64` is a compile error.
//!
//! # Usage
//!
//! ```
//! // Use the two standard orientations, or spell out the type.
//! # use unorm::{Unorm, Reversed};
//! use unorm::{anorm, mnorm};
//! type MyUnorm = Unorm<12, Reversed>;  // 12 bits, mirrored, stored in a u16
//!
//! // Create unorms from floats or from a raw bit representation.
//! # use unorm::{QuantizeFrom, QuantizeInto};
//! let a = anorm::<32>::from_float(0.75_f32);
//! let b = mnorm::<32>::quantize_from(0.5_f64);
//! let c: MyUnorm = 1.25_f32.quantize_into();
//! let d = anorm::<8>::from_bits(0b0110_0000);
//!
//! // Perform arithmetic with the usual operators.
//! assert_eq!(a + anorm::<32>::from_float(0.25_f32), anorm::<32>::from_float(1.0_f32));
//! assert_eq!(b * mnorm::<32>::from_float(1.0_f32), b);
//!
//! // Print the exact value, or inspect the raw bits.
//! assert_eq!(c.to_string(), "1.25un");
//! assert_eq!(d.to_string(), "0.75un");
//! assert_eq!(mnorm::<8>::from_float(0.75_f32).to_bits(), 0b0000_0110);
//! ```
//!
//! # Features
//!
//!   - `compat-sub`: subtracting [`Direct`] unorms *adds* instead, reproducing the behaviour of
//!     earlier versions of this type.
//!   - `bench`: export some kernels for benchmarking and inspection with `cargo asm`. Run the
//!     benchmarks with `cargo bench -F bench`.

mod unorm;
mod underlying;
mod error;

pub use unorm::{Unorm, Orientation, Direct, Reversed};
pub use underlying::{Uint, Float, Width, NarrowestUnsigned, UintFor, bitrev};
pub use error::{Error, Result};

/// A unorm in the natural bit order, where addition and subtraction are native.
#[allow(non_camel_case_types)]
pub type anorm<const P: u32 = 32> = Unorm<P, Direct>;

/// A unorm in the mirrored bit order, where multiplication and division are native.
#[allow(non_camel_case_types)]
pub type mnorm<const P: u32 = 32> = Unorm<P, Reversed>;

pub use unorm::convert::{QuantizeFrom, QuantizeInto};

/// Number of cases per property test.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x4_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;
