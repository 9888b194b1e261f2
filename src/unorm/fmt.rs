use super::*;

use core::fmt::{Debug, Display, Write};

/// Upper bound on the number of decimal digits after the point: a `P`-bit unorm has `P - 1`
/// fractional bits, and `2^-k` has exactly `k` decimal digits.
const MAX_DIGITS: usize = 63;

/// A decimal fraction `0.d₀d₁d₂…` with up to [`MAX_DIGITS`] digits, one digit per byte.
struct DecimalFraction {
  digits: [u8; MAX_DIGITS],
  len: usize,
}

impl DecimalFraction {
  const ZERO: Self = Self { digits: [0; MAX_DIGITS], len: 0 };

  /// `0.5`, i.e. `2^-1`.
  const HALF: Self = {
    let mut half = Self::ZERO;
    half.digits[0] = 5;
    half.len = 1;
    half
  };

  /// Divide by two in place, one digit at a time from the left. Since the last digit of `2^-k`
  /// is always 5, the remainder spills into a new last digit, which is again 5.
  fn halve(&mut self) {
    let mut rem = 0;
    for digit in &mut self.digits[.. self.len] {
      let cur = rem * 10 + *digit;
      *digit = cur / 2;
      rem = cur % 2;
    }
    if rem != 0 {
      self.digits[self.len] = 5;
      self.len += 1;
    }
  }

  /// Add `other` in place, carrying from the rightmost digit towards the left. The sum must
  /// stay below 1.
  fn add(&mut self, other: &Self) {
    let len = self.len.max(other.len);
    let mut carry = 0;
    for i in (0 .. len).rev() {
      let sum = self.digits[i] + other.digits[i] + carry;
      self.digits[i] = sum % 10;
      carry = sum / 10;
    }
    debug_assert_eq!(carry, 0, "decimal fraction overflowed past the point");
    self.len = len;
  }

  /// The exact decimal expansion of the binary fraction `0.b₁b₂…bₙ`, where `b₁` is bit `n - 1` of
  /// `bits` and `bₙ` is bit 0.
  ///
  /// Each set bit `bₖ` contributes `2^-k`, whose decimal digits are kept exact by halving the
  /// running weight in decimal rather than in binary. Trailing zeros never appear: the last digit
  /// is always the trailing 5 of the weight of the least significant set bit.
  fn of_binary(bits: u64, n: u32) -> Self {
    debug_assert!(n as usize <= MAX_DIGITS);
    let mut rest = bits & u64::MAX.checked_shr(64 - n).unwrap_or(0);
    let mut sum = Self::ZERO;
    let mut weight = Self::HALF;
    for k in (0 .. n).rev() {
      if (rest >> k) & 1 == 1 {
        sum.add(&weight);
        rest &= !(1 << k);
      }
      if rest == 0 {
        break
      }
      weight.halve();
    }
    sum
  }

  fn digits(&self) -> &[u8] {
    &self.digits[.. self.len]
  }
}

impl<
  const P: u32,
  O: Orientation,
> Display for Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// Writes the exact value of `self` in decimal, followed by the suffix `un`.
  ///
  /// The value is the Direct word over `2^(P-1)`: its msb is printed as the units digit, and the
  /// remaining `P - 1` bits as the exact decimal expansion of the binary fraction they hold (at
  /// least one digit, no trailing zeros). No floating point is involved, so nothing is rounded.
  ///
  /// ```
  /// # use unorm::*;
  /// assert_eq!(anorm::<4>::from_bits(0b1000).to_string(), "1.0un");
  /// assert_eq!(anorm::<4>::from_bits(0b1011).to_string(), "1.375un");
  /// assert_eq!(mnorm::<4>::from_bits(0b1101).to_string(), "1.375un");
  /// assert_eq!(anorm::<8>::from_float(0.1_f32).to_string(), "0.09375un");
  /// ```
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits: u64 = self.to_direct_bits().into();
    let units = bits >> (Self::BITS - 1);
    let fraction = DecimalFraction::of_binary(bits, Self::BITS - 1);

    f.write_char(if units == 1 { '1' } else { '0' })?;
    f.write_char('.')?;
    if fraction.len == 0 {
      f.write_char('0')?;
    }
    for &digit in fraction.digits() {
      f.write_char(char::from(b'0' + digit))?;
    }
    f.write_str("un")
  }
}

impl<
  const P: u32,
  O: Orientation,
> Debug for Unorm<P, O> where Width<P>: NarrowestUnsigned {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.word;
    f.debug_tuple(O::NAME)
      .field(&format_args!("0b{bits:0w$b}", w=Self::BITS as usize))
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::Natural;
  use malachite::base::num::arithmetic::traits::Pow;
  use proptest::prelude::*;

  /// The exact decimal rendering of `w / 2^(P-1)`, computed independently as the big integer
  /// `w × 5^(P-1)` with the point inserted `P-1` digits from the right.
  fn oracle(w: u64, p: u32) -> String {
    let scale = p as usize - 1;
    let digits = (Natural::from(w) * Natural::from(5u32).pow(scale as u64)).to_string();
    let digits = format!("{digits:0>width$}", width = scale + 1);
    let (units, fraction) = digits.split_at(digits.len() - scale);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{units}.{fraction}un")
  }

  #[test]
  fn oracle_sanity() {
    assert_eq!(oracle(0b1011, 4), "1.375un");
    assert_eq!(oracle(0, 4), "0.0un");
    assert_eq!(oracle(1, 1), "1.0un");
  }

  #[test]
  fn rendering_p4() {
    assert_eq!(Unorm::<4, Direct>::from_bits(0b1000).to_string(), "1.0un");
    assert_eq!(Unorm::<4, Direct>::from_bits(0b0000).to_string(), "0.0un");
    assert_eq!(Unorm::<4, Direct>::from_bits(0b1111).to_string(), "1.875un");
    assert_eq!(Unorm::<4, Direct>::from_bits(0b1011).to_string(), "1.375un");
    assert_eq!(Unorm::<4, Direct>::from_bits(0b0001).to_string(), "0.125un");
    assert_eq!(Unorm::<4, Direct>::from_bits(0b0100).to_string(), "0.5un");
  }

  #[test]
  fn rendering_reversed_p4() {
    assert_eq!(Unorm::<4, Reversed>::from_bits(0b0001).to_string(), "1.0un");
    assert_eq!(Unorm::<4, Reversed>::from_bits(0b0000).to_string(), "0.0un");
    assert_eq!(Unorm::<4, Reversed>::from_bits(0b1111).to_string(), "1.875un");
    assert_eq!(Unorm::<4, Reversed>::from_bits(0b1000).to_string(), "0.125un");
  }

  #[test]
  fn rendering_p1() {
    assert_eq!(Unorm::<1, Direct>::from_bits(1).to_string(), "1.0un");
    assert_eq!(Unorm::<1, Reversed>::from_bits(0).to_string(), "0.0un");
  }

  #[test]
  fn rendering_from_float() {
    assert_eq!(Unorm::<32, Direct>::from_float(0.5_f32).to_string(), "0.5un");
    assert_eq!(Unorm::<32, Reversed>::from_float(0.75_f32).to_string(), "0.75un");
    assert_eq!(Unorm::<16, Direct>::from_float(1.0_f64).to_string(), "1.0un");
    assert_eq!(Unorm::<16, Direct>::from_float(1.25_f64).to_string(), "1.25un");
  }

  #[test]
  fn rendering_max_64() {
    // 2 - 2^-63 has 63 digits after the point, ending in ...5
    let s = Unorm::<64, Direct>::MAX.to_string();
    assert!(s.starts_with("1.99999999999999999989157978275144955659"), "{s}");
    assert_eq!(s.len(), "1.".len() + 63 + "un".len());
    assert!(s.ends_with("5un"));
    assert_eq!(s, oracle(u64::MAX, 64));
  }

  #[test]
  fn rendering_epsilon_64() {
    assert_eq!(Unorm::<64, Reversed>::EPSILON.to_string(), oracle(1, 64));
  }

  #[test]
  fn debug() {
    assert_eq!(format!("{:?}", Unorm::<8, Direct>::from_bits(0b0010_1011)), "anorm(0b00101011)");
    assert_eq!(format!("{:?}", Unorm::<6, Reversed>::from_bits(0b101011)), "mnorm(0b101011)");
    assert_eq!(format!("{:?}", Unorm::<12, Direct>::from_bits(0x00f)), "anorm(0b000000001111)");
  }

  macro_rules! test_exhaustive {
    ($name:ident, $p:literal) => {
      #[test]
      fn $name() {
        for a in Unorm::<$p, Direct>::cases_exhaustive() {
          assert_eq!(a.to_string(), oracle(a.to_bits().into(), $p));
          let b = Unorm::<$p, Reversed>::from_direct_bits(a.to_bits());
          assert_eq!(b.to_string(), a.to_string());
        }
      }
    };
  }

  macro_rules! test_proptest {
    ($name:ident, $p:literal) => {
      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
        #[test]
        fn $name(a in Unorm::<$p, Direct>::cases_proptest()) {
          prop_assert_eq!(a.to_string(), oracle(a.to_bits().into(), $p));
          let b = Unorm::<$p, Reversed>::from_direct_bits(a.to_bits());
          prop_assert_eq!(b.to_string(), a.to_string());
        }
      }
    };
  }

  test_exhaustive!{unorm_1_exhaustive, 1}
  test_exhaustive!{unorm_4_exhaustive, 4}
  test_exhaustive!{unorm_9_exhaustive, 9}
  test_exhaustive!{unorm_16_exhaustive, 16}

  test_proptest!{unorm_24_proptest, 24}
  test_proptest!{unorm_32_proptest, 32}
  test_proptest!{unorm_53_proptest, 53}
  test_proptest!{unorm_64_proptest, 64}
}
