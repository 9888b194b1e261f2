use super::*;

/// One line of the [`const_of_u64`] function.
macro_rules! const_of_u64_line {
  ($x:ident, $u:ty) => {
    if const { U::BITS == <$u>::BITS } {
      // SAFETY: Because U and $u are guaranteed to be `uX` of the same width, `$u` is `U`;
      // therefore the transmute_copy is a no-op.
      let u = $x as $u;
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// A type-generic and `const` version of `x as U`, for narrowing a `u64` into a [`Uint`] (keeps
/// the lowest `U::BITS` bits).
///
/// ```ignore
/// # use unorm::underlying::const_of_u64;
/// assert_eq!(const_of_u64::<u16>(0xdead_beef), 0xbeef_u16);
/// ```
pub const fn const_of_u64<U: Uint>(x: u64) -> U {
  const_of_u64_line!(x, u8);
  const_of_u64_line!(x, u16);
  const_of_u64_line!(x, u32);
  const_of_u64_line!(x, u64);
  unreachable!() // cannot be const { unreachable!() }
}
