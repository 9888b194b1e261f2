use super::*;

use crate::underlying::{Float, Sealed};

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// Construct a unorm from the bit layout of a float `x` (`f32` or `f64`).
  ///
  /// The float is decomposed as `|x| = m × 2^e` with `m` in `[0.5, 1)`; the top `P` significant
  /// bits of `m` (hidden bit included) become the `P`-bit field, which is then shifted by `e - 1`.
  /// The resulting Direct word approximates `|x| × 2^(P-1)`:
  ///
  ///   - Values in `[0, 2)` are truncated (not rounded) to `P` bits.
  ///   - Values `≥ 2` wrap around: bits shifted out the top of the field are lost.
  ///   - Values below `2^-(P-1)` flush to 0: bits shifted out the bottom are lost.
  ///   - The sign is ignored.
  ///   - `0.0` has no hidden bit, but one is set anyway, so it converts to the Direct word
  ///     `0b0100...0` (i.e. `0.5`), or to 0 if `P == 1`.
  ///
  /// No conversion ever clamps or fails. For infinities and NaNs the result is **unspecified**
  /// (currently it is 0, but do not rely on it).
  ///
  /// ```
  /// # use unorm::*;
  /// assert_eq!(anorm::<8>::from_float(0.75_f32).to_bits(), 0b0110_0000);
  /// assert_eq!(mnorm::<8>::from_float(0.75_f32).to_bits(), 0b0000_0110);
  /// assert_eq!(anorm::<8>::from_float(1.5_f64).to_bits(), 0b1100_0000);
  /// assert_eq!(anorm::<8>::from_float(3.0_f64).to_bits(), 0b1000_0000);  // wraps
  /// ```
  pub fn from_float<F: Float>(x: F) -> Self {
    let (significand, exponent) = x.frexp();

    // Keep the top `P` significant bits.
    let digits = F::MANTISSA_DIGITS;
    let field = if Self::BITS > digits {
      significand << (Self::BITS - digits)
    } else {
      significand >> (digits - Self::BITS)
    };

    // Add the hidden bit, which is already there for anything but 0.
    let field = field | 1 << (Self::BITS - 1);

    // A field of `0b1xxx…` stands for `1.xxx…`, but `m` is `0.1xxx…`, hence the `- 1`. Shifting
    // by `P` or more places leaves nothing of the field.
    let shift = exponent - 1;
    let field = if shift < 0 {
      field.checked_shr(shift.unsigned_abs()).unwrap_or(0)
    } else {
      field.checked_shl(shift.unsigned_abs()).unwrap_or(0)
    };

    Self::from_direct_bits(<UintFor<P>>::of_u64(field))
  }
}

macro_rules! impl_quantize_from {
  ($float:ty) => {
    impl<
      const P: u32,
      O: Orientation,
    > QuantizeFrom<$float> for Unorm<P, O> where Width<P>: NarrowestUnsigned {
      /// Convert a float into a unorm; see [`Unorm::from_float`] for the exact semantics.
      #[inline]
      fn quantize_from(value: $float) -> Self {
        Self::from_float(value)
      }
    }
  };
}

impl_quantize_from!{f32}
impl_quantize_from!{f64}

#[cfg(test)]
mod tests {
  use super::*;

  /// Instantiate a suite of tests
  macro_rules! make_tests {
    ($float:ty, $p:literal) => {
      use super::*;
      use proptest::prelude::*;

      type Anorm = Unorm<$p, Direct>;
      type Mnorm = Unorm<$p, Reversed>;

      /// The Direct word of 1.0 and of 0.5.
      const ONE: u64 = 1 << ($p - 1);
      const HALF: u64 = 1 << ($p - 2);

      fn direct(x: $float) -> u64 {
        Anorm::from_float(x).to_bits().into()
      }

      #[test]
      fn one() {
        assert_eq!(direct(1.0), ONE)
      }

      #[test]
      fn half() {
        assert_eq!(direct(0.5), HALF)
      }

      #[test]
      fn one_and_a_half() {
        assert_eq!(direct(1.5), ONE | HALF)
      }

      #[test]
      fn quarter() {
        assert_eq!(direct(0.25), HALF >> 1)
      }

      #[test]
      fn zero_is_half() {
        assert_eq!(direct(0.0), HALF)
      }

      #[test]
      fn two_wraps_to_zero() {
        assert_eq!(direct(2.0), 0)
      }

      #[test]
      fn three_wraps() {
        assert_eq!(direct(3.0), ONE)
      }

      #[test]
      fn tiny_flushes_to_zero() {
        assert_eq!(direct(<$float>::MIN_POSITIVE), 0);
        assert_eq!(direct(<$float>::from_bits(1)), 0);
      }

      #[test]
      fn epsilon() {
        let eps = (0.5 as $float).powi($p - 1);
        assert_eq!(direct(eps), 1);
        assert_eq!(direct(eps / 2.), 0);
      }

      #[test]
      fn huge_wraps_to_zero() {
        assert_eq!(direct(<$float>::MAX), 0)
      }

      #[test]
      fn sign_is_ignored() {
        assert_eq!(direct(-0.75), direct(0.75));
        assert_eq!(direct(-1.25), direct(1.25));
      }

      #[test]
      fn quantize_from() {
        assert_eq!(Anorm::quantize_from(0.625 as $float), Anorm::from_float(0.625 as $float));
        let b: Mnorm = (0.625 as $float).quantize_into();
        assert_eq!(b, Mnorm::from_float(0.625 as $float));
      }

      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

        /// In `[2^-(P-1), 2)` the Direct word is `x × 2^(P-1)`, truncated.
        #[test]
        fn truncates(x in (0.5 as $float).powi($p - 1) .. 2.0) {
          let scaled = x * (2.0 as $float).powi($p - 1);
          prop_assert_eq!(direct(x), scaled.trunc() as u64);
        }

        /// A Reversed unorm holds the mirrored Direct word.
        #[test]
        fn reversed_is_mirror(x: $float) {
          let a = Anorm::from_float(x);
          let b = Mnorm::from_float(x);
          prop_assert_eq!(b.to_bits(), Anorm::mirror(a.to_bits()));
          prop_assert_eq!(b.to_direct_bits(), a.to_bits());
        }

        /// Within the representable window, the Direct word is monotonic in `x`.
        #[test]
        fn monotonic(x in 0.0 as $float .. 2.0, y in 0.0 as $float .. 2.0) {
          let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
          // Exclude `0.0`, which converts to `0.5`.
          prop_assume!(lo > 0.0);
          prop_assert!(direct(lo) <= direct(hi));
        }

        /// Junk bits above `P` are always 0.
        #[test]
        fn no_junk(x: $float) {
          let word: u64 = Anorm::from_float(x).to_bits().into();
          prop_assert_eq!(word >> ($p - 1) >> 1, 0);
          let word: u64 = Mnorm::from_float(x).to_bits().into();
          prop_assert_eq!(word >> ($p - 1) >> 1, 0);
        }
      }
    };
  }

  mod from_f32 {
    use super::*;

    mod p4 { make_tests!{f32, 4} }
    mod p8 { make_tests!{f32, 8} }
    mod p12 { make_tests!{f32, 12} }
    mod p24 { make_tests!{f32, 24} }
    mod p32 { make_tests!{f32, 32} }
    mod p40 { make_tests!{f32, 40} }
    mod p64 { make_tests!{f32, 64} }
  }

  mod from_f64 {
    use super::*;

    mod p4 { make_tests!{f64, 4} }
    mod p8 { make_tests!{f64, 8} }
    mod p16 { make_tests!{f64, 16} }
    mod p32 { make_tests!{f64, 32} }
    mod p53 { make_tests!{f64, 53} }
    mod p60 { make_tests!{f64, 60} }
    mod p64 { make_tests!{f64, 64} }
  }

  #[test]
  fn p1() {
    assert_eq!(Unorm::<1, Direct>::from_float(1.0_f32).to_bits(), 1);
    assert_eq!(Unorm::<1, Direct>::from_float(1.75_f64).to_bits(), 1);
    assert_eq!(Unorm::<1, Direct>::from_float(0.75_f64).to_bits(), 0);
    assert_eq!(Unorm::<1, Reversed>::from_float(0.0_f32).to_bits(), 0);
  }

  #[test]
  fn nan_and_infinity_do_not_panic() {
    let _ = Unorm::<32, Direct>::from_float(f32::NAN);
    let _ = Unorm::<32, Reversed>::from_float(f64::INFINITY);
    let _ = Unorm::<7, Direct>::from_float(f64::NEG_INFINITY);
  }

  #[test]
  fn reference_examples() {
    // 0.75 = 0.11₂, so the 8-bit Direct word is 0.1100000 scaled up by 2^7.
    assert_eq!(Unorm::<8, Direct>::from_float(0.75_f32).to_bits(), 0b0110_0000);
    assert_eq!(Unorm::<8, Reversed>::from_float(0.75_f32).to_bits(), 0b0000_0110);
    assert_eq!(Unorm::<32, Reversed>::from_float(0.5_f32).to_bits(), 0b10);
    // 0.1_f32 is a hair above 0.1, so this is 0x0ccc_cccc rounded up.
    assert_eq!(Unorm::<32, Direct>::from_float(0.1_f32).to_bits(), 0x0ccc_ccd0);
  }
}
