use super::*;

/// Implementation of all functions, parametrised by the machine type and its bit reversal.
macro_rules! impl_common {
  ($uint:ty, $reverse:path) => {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = <$uint>::MAX;
    const BITS: u32 = <$uint>::BITS;

    #[inline]
    fn of_u64(x: u64) -> Self { x as $uint }

    #[inline]
    fn reverse(self) -> Self { $reverse(self) }

    #[inline]
    fn reverse_low(self, n: u32) -> Self {
      debug_assert!(n >= 1 && n <= Self::BITS);
      $reverse(self) >> (Self::BITS - n)
    }

    #[inline]
    fn mask_lsb(self, n: u32) -> Self {
      debug_assert!(n >= 1 && n <= Self::BITS);
      self & (<$uint>::MAX >> (Self::BITS - n))
    }

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn wrapping_mul(self, other: Self) -> Self { self.wrapping_mul(other) }
  }
}

impl Uint for u64 {}
impl Sealed for u64 {
  impl_common!{u64, bitrev::reverse_u64}
}

impl Uint for u32 {}
impl Sealed for u32 {
  impl_common!{u32, bitrev::reverse_u32}
}

impl Uint for u16 {}
impl Sealed for u16 {
  impl_common!{u16, bitrev::reverse_u16}
}

impl Uint for u8 {}
impl Sealed for u8 {
  impl_common!{u8, bitrev::reverse_u8}
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn of_u64() {
    assert_eq!(<u8 as Sealed>::of_u64(0x1234), 0x34_u8);
    assert_eq!(<u16 as Sealed>::of_u64(0xdead_beef), 0xbeef_u16);
    assert_eq!(<u32 as Sealed>::of_u64(0x0123_4567_89ab_cdef), 0x89ab_cdef_u32);
    assert_eq!(<u64 as Sealed>::of_u64(u64::MAX), u64::MAX);
  }

  #[test]
  fn mask_lsb() {
    assert_eq!(0b01111110_u8.mask_lsb(3), 0b00000110_u8);
    assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16);
    assert_eq!(0xabcdabcd_u32.mask_lsb(4), 0x0000000d_u32);
    assert_eq!(0xdeadbeefdeadbeef_u64.mask_lsb(6), 0x2f_u64);
    assert_eq!(0xdeadbeefdeadbeef_u64.mask_lsb(64), 0xdeadbeefdeadbeef_u64);
  }

  #[test]
  fn reverse_low() {
    assert_eq!(0b0000_0011_u8.reverse_low(4), 0b0000_1100_u8);
    assert_eq!(0b0000_0011_u8.reverse_low(8), 0b1100_0000_u8);
    assert_eq!(0b1111_0001_u8.reverse_low(4), 0b0000_1000_u8);
    assert_eq!(0b1_u16.reverse_low(9), 0b1_0000_0000_u16);
    assert_eq!(0x0000_0001_u32.reverse_low(31), 0x4000_0000_u32);
    assert_eq!(1_u64.reverse_low(1), 1_u64);
    assert_eq!(2_u64.reverse_low(1), 0_u64);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn reverse_low_involution_u16(x: u16, n in 1 ..= 16_u32) {
      let x = x.mask_lsb(n);
      prop_assert_eq!(x.reverse_low(n).reverse_low(n), x);
    }

    #[test]
    fn reverse_low_involution_u64(x: u64, n in 1 ..= 64_u32) {
      let x = x.mask_lsb(n);
      prop_assert_eq!(x.reverse_low(n).reverse_low(n), x);
    }

    #[test]
    fn reverse_low_fits(x: u32, n in 1 ..= 32_u32) {
      prop_assert_eq!(x.reverse_low(n).mask_lsb(n), x.reverse_low(n));
    }
  }
}
