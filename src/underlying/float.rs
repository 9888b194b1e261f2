use super::Float;

/// Actual operations implemented here.
pub trait Sealed: Copy {
  /// Number of significant binary digits, including the implicit leading bit (24 for `f32`, 53
  /// for `f64`).
  const MANTISSA_DIGITS: u32;

  /// Split `|self|` into a significand and an exponent, in the manner of C's `frexp`: returns
  /// `(sig, exp)` such that
  ///
  /// ```text
  /// |self| = sig / 2^MANTISSA_DIGITS × 2^exp
  /// ```
  ///
  /// where `sig` has its bit `MANTISSA_DIGITS - 1` set, i.e. `sig / 2^MANTISSA_DIGITS` lies in
  /// `[0.5, 1)`. Subnormals are normalised. Zero gives `(0, 0)`.
  ///
  /// For infinities and NaNs the result is unspecified (they are decomposed as if their exponent
  /// field held an ordinary, very large, exponent).
  fn frexp(self) -> (u64, i32);
}

macro_rules! impl_common {
  ($float:ty, $bits:ty) => {
    const MANTISSA_DIGITS: u32 = <$float>::MANTISSA_DIGITS;

    fn frexp(self) -> (u64, i32) {
      const EXPLICIT: u32 = <$float>::MANTISSA_DIGITS - 1;
      const EXP_BITS: u32 = <$bits>::BITS - 1 - EXPLICIT;
      // `frexp` places the significand in `[0.5, 1)` rather than `[1, 2)`, hence one less than
      // the usual IEEE bias.
      const BIAS: i32 = (1 << (EXP_BITS - 1)) - 2;

      let bits = u64::from(self.to_bits()) & !(1 << (<$bits>::BITS - 1));
      let mantissa = bits & ((1 << EXPLICIT) - 1);
      let exponent = (bits >> EXPLICIT) as i32;

      if exponent != 0 {
        // Normal (or infinite/NaN): reinstate the hidden bit.
        (mantissa | 1 << EXPLICIT, exponent - BIAS)
      } else if mantissa == 0 {
        (0, 0)
      } else {
        // Subnormal: shift the first 1 into the hidden bit position, and lower the exponent
        // accordingly.
        let underflow = mantissa.leading_zeros() - (64 - <$float>::MANTISSA_DIGITS);
        (mantissa << underflow, 1 - BIAS - underflow as i32)
      }
    }
  };
}

impl Float for f32 {}
impl Sealed for f32 {
  impl_common!{f32, u32}
}

impl Float for f64 {}
impl Sealed for f64 {
  impl_common!{f64, u64}
}
