use super::*;

/// Implement [`NarrowestUnsigned`] for a run of widths that all share the same machine type.
macro_rules! narrowest {
  ($uint:ty: $($b:literal)*) => {
    $(
      impl NarrowestUnsigned for Width<$b> {
        type Uint = $uint;
      }
    )*
  };
}

narrowest!{u8: 1 2 3 4 5 6 7 8}
narrowest!{u16: 9 10 11 12 13 14 15 16}
narrowest!{u32: 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32}
narrowest!{u64:
  33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
  49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use unorm::UintFor;
  /// pub fn foo() -> UintFor<65> { 0 }
  /// ```
  #[allow(dead_code)]
  fn width_fail_65() {}

  /// ```compile_fail
  /// use unorm::UintFor;
  /// pub fn foo() -> UintFor<0> { 0 }
  /// ```
  #[allow(dead_code)]
  fn width_fail_0() {}

  /// ```compile_fail
  /// use unorm::anorm;
  /// pub fn foo() -> u32 { anorm::<65>::BITS }
  /// ```
  #[allow(dead_code)]
  fn unorm_fail_65() {}
}
