use super::*;

/// Addition and subtraction (native on [`Direct`] words).
mod add;

/// Multiplication (native on [`Reversed`] words).
mod mul;

/// Division (native on [`Reversed`] words).
mod div;

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// Apply the native integer operation `op` to the words of `self` and `other`, as laid out in
  /// orientation `D`.
  ///
  /// If `D` is the orientation `self` is stored in, this is just `op` on the words, truncated to
  /// `P` bits. Otherwise both words are mirrored into `D`, `op` is applied, and the result is
  /// mirrored back (which also truncates it to `P` bits).
  #[inline]
  pub(crate) fn in_domain<D: Orientation>(
    self,
    other: Self,
    op: impl FnOnce(UintFor<P>, UintFor<P>) -> UintFor<P>,
  ) -> Self {
    if const { D::REVERSED == O::REVERSED } {
      Self::from_bits(op(self.word, other.word))
    } else {
      let result = op(Self::mirror(self.word), Self::mirror(other.word));
      Self::from_word(Self::mirror(result))
    }
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const P: u32, O: Orientation>
    $trait<Unorm<P, O>> for Unorm<P, O> where Width<P>: NarrowestUnsigned {
      type Output = Unorm<P, O>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const P: u32, O: Orientation>
    $trait<&Unorm<P, O>> for Unorm<P, O> where Width<P>: NarrowestUnsigned {
      type Output = Unorm<P, O>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const P: u32, O: Orientation>
    $trait<Unorm<P, O>> for &Unorm<P, O> where Width<P>: NarrowestUnsigned {
      type Output = Unorm<P, O>;

      #[inline]
      fn $name(self, rhs: Unorm<P, O>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const P: u32, O: Orientation>
    $trait<&Unorm<P, O>> for &Unorm<P, O> where Width<P>: NarrowestUnsigned {
      type Output = Unorm<P, O>;

      #[inline]
      fn $name(self, rhs: &Unorm<P, O>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const P: u32, O: Orientation>
    $trait_assign<Unorm<P, O>> for Unorm<P, O> where Width<P>: NarrowestUnsigned {
      #[inline]
      fn $name_assign(&mut self, rhs: Unorm<P, O>) { *self = self.$name(rhs) }
    }

    impl<const P: u32, O: Orientation>
    $trait_assign<&Unorm<P, O>> for Unorm<P, O> where Width<P>: NarrowestUnsigned {
      #[inline]
      fn $name_assign(&mut self, rhs: &Unorm<P, O>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator of unorms.
///
/// `$native` is the orientation the operator is native in, and `$oracle` computes the expected
/// result from the two words (as `u64`s, laid out in that orientation), before truncation.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $native:ty, $oracle:expr) => {
    use crate::{Unorm, Direct, Reversed};
    use crate::underlying::{NarrowestUnsigned, Width};
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::anorm::<32>::MAX;
      let mut b = crate::anorm::<32>::EPSILON;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` matches the oracle in `$native`'s bit order, and that
    /// the same operation on the other orientation gives the mirrored result.
    fn is_correct<const P: u32>(a: Unorm<P, Direct>, b: Unorm<P, Direct>) -> bool
    where Width<P>: NarrowestUnsigned {
      let oracle: fn(u64, u64) -> Option<u64> = $oracle;
      let mask = u64::MAX >> (64 - P);
      let (a_rev, b_rev) = (
        Unorm::<P, Reversed>::from_direct_bits(a.to_bits()),
        Unorm::<P, Reversed>::from_direct_bits(b.to_bits()),
      );
      let (x, y): (u64, u64) = if <$native as crate::Orientation>::REVERSED {
        (a_rev.to_bits().into(), b_rev.to_bits().into())
      } else {
        (a.to_bits().into(), b.to_bits().into())
      };
      let Some(expected) = oracle(x, y) else { return true };
      let expected = expected & mask;

      let direct = a $op b;
      let reversed = a_rev $op b_rev;
      let got: u64 = if <$native as crate::Orientation>::REVERSED {
        reversed.to_bits().into()
      } else {
        direct.to_bits().into()
      };
      got == expected && reversed.to_direct_bits() == direct.to_bits()
    }

    macro_rules! test_exhaustive {
      ($name:ident, $p:literal) => {
        #[test]
        fn $name() {
          for a in Unorm::<$p, Direct>::cases_exhaustive() {
            for b in Unorm::<$p, Direct>::cases_exhaustive() {
              assert!(is_correct(a, b), "{:?} {} {:?}", a, stringify!($op), b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $p:literal) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in Unorm::<$p, Direct>::cases_proptest(),
            b in Unorm::<$p, Direct>::cases_proptest(),
          ) {
            assert!(is_correct(a, b), "{:?} {} {:?}", a, stringify!($op), b)
          }
        }
      };
    }

    test_exhaustive!{unorm_1_exhaustive, 1}
    test_exhaustive!{unorm_3_exhaustive, 3}
    test_exhaustive!{unorm_4_exhaustive, 4}
    test_exhaustive!{unorm_8_exhaustive, 8}
    test_exhaustive!{unorm_10_exhaustive, 10}

    test_proptest!{unorm_12_proptest, 12}
    test_proptest!{unorm_16_proptest, 16}
    test_proptest!{unorm_24_proptest, 24}
    test_proptest!{unorm_32_proptest, 32}
    test_proptest!{unorm_40_proptest, 40}
    test_proptest!{unorm_64_proptest, 64}
  }
}

pub(crate) use mk_tests;
