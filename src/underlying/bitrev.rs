//! Reverse the order of the bits in a machine word.
//!
//! The portable rendition is a fixed network of masked swaps on progressively wider groups of
//! bits: adjacent bits, then pairs, then nibbles, then bytes, and so on until the two halves of
//! the word are swapped. It is branch-free and takes the same time for every input.
//!
//! On targets with a bit-reverse instruction (`rbit` on arm/aarch64) we defer to
//! [`u32::reverse_bits`] and friends, which lower to it.

/// Whether this target has a native bit-reverse instruction.
const HW_REVERSE: bool = cfg!(any(target_arch = "aarch64", target_arch = "arm"));

/// Reverse the order of the 8 bits of `n`.
#[inline]
pub const fn reverse_u8(n: u8) -> u8 {
  if HW_REVERSE {
    return n.reverse_bits()
  }
  let n = ((n & 0xaa) >> 1) | ((n & 0x55) << 1);
  let n = ((n & 0xcc) >> 2) | ((n & 0x33) << 2);
  n.rotate_left(4)
}

/// Reverse the order of the 16 bits of `n`.
#[inline]
pub const fn reverse_u16(n: u16) -> u16 {
  if HW_REVERSE {
    return n.reverse_bits()
  }
  let n = ((n & 0xaaaa) >> 1) | ((n & 0x5555) << 1);
  let n = ((n & 0xcccc) >> 2) | ((n & 0x3333) << 2);
  let n = ((n & 0xf0f0) >> 4) | ((n & 0x0f0f) << 4);
  n.rotate_left(8)
}

/// Reverse the order of the 32 bits of `n`.
#[inline]
pub const fn reverse_u32(n: u32) -> u32 {
  if HW_REVERSE {
    return n.reverse_bits()
  }
  let n = ((n & 0xaaaaaaaa) >> 1) | ((n & 0x55555555) << 1);
  let n = ((n & 0xcccccccc) >> 2) | ((n & 0x33333333) << 2);
  let n = ((n & 0xf0f0f0f0) >> 4) | ((n & 0x0f0f0f0f) << 4);
  let n = ((n & 0xff00ff00) >> 8) | ((n & 0x00ff00ff) << 8);
  n.rotate_left(16)
}

/// Reverse the order of the 64 bits of `n`.
#[inline]
pub const fn reverse_u64(n: u64) -> u64 {
  if HW_REVERSE {
    return n.reverse_bits()
  }
  let n = ((n & 0xaaaaaaaaaaaaaaaa) >> 1) | ((n & 0x5555555555555555) << 1);
  let n = ((n & 0xcccccccccccccccc) >> 2) | ((n & 0x3333333333333333) << 2);
  let n = ((n & 0xf0f0f0f0f0f0f0f0) >> 4) | ((n & 0x0f0f0f0f0f0f0f0f) << 4);
  let n = ((n & 0xff00ff00ff00ff00) >> 8) | ((n & 0x00ff00ff00ff00ff) << 8);
  let n = ((n & 0xffff0000ffff0000) >> 16) | ((n & 0x0000ffff0000ffff) << 16);
  n.rotate_left(32)
}
