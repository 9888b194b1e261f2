use super::*;

/// Used to do value-to-value conversions that *quantize* the input into a fixed number of bits,
/// possibly losing information (see below). It is the reciprocal of [`QuantizeInto`].
///
/// The interface is identical to the standard [`From`], but these conversions are _not lossless_,
/// contrary to the [convention for the `From` trait](core::convert::From#when-to-implement-from):
/// they truncate, and out-of-range inputs wrap around rather than saturate.
///
/// The exact meaning of these conversions depends on the types involved; for the exact
/// description of what each particular conversion does, **consult the documentation for
/// specific implementations of `quantize_from`**.
///
/// As with [`From`], prefer implementing [`QuantizeFrom`] over [`QuantizeInto`], because
/// implementing [`QuantizeFrom`] automatically provides an implementation of [`QuantizeInto`].
/// There's also a blanket implementation of `QuantizeFrom<T> for T`.
///
/// # Examples
///
/// ```
/// # use unorm::*;
/// let a = mnorm::<32>::quantize_from(0.75_f32);
/// let b: mnorm<32> = 0.75_f64.quantize_into();
/// assert_eq!(a, b);
/// ```
pub trait QuantizeFrom<T> {
  /// Converts to this type from the input type, truncating to the precision of `Self`.
  #[must_use]
  fn quantize_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that *quantize* the input into a fixed number of bits,
/// possibly losing information. It is the reciprocal of [`QuantizeFrom`]; see there for details.
pub trait QuantizeInto<T> {
  /// Converts this type into the (usually inferred) input type, truncating to the precision of
  /// the target.
  #[must_use]
  fn quantize_into(self) -> T;
}

impl<T> QuantizeFrom<T> for T {
  fn quantize_from(value: T) -> Self {
    value
  }
}

impl<T, U> QuantizeInto<U> for T where U: QuantizeFrom<T> {
  fn quantize_into(self) -> U {
    U::quantize_from(self)
  }
}

mod float;
