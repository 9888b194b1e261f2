//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{Unorm, Orientation, Width, NarrowestUnsigned, UintFor, anorm, mnorm};

impl<
  const P: u32,
  O: Orientation,
> Unorm<P, O> where Width<P>: NarrowestUnsigned {
  pub fn bench_mirror(word: UintFor<P>) -> UintFor<P> {
    Self::mirror(word)
  }

  pub fn bench_add(self, other: Self) -> Self {
    self.add(other)
  }

  pub fn bench_mul(self, other: Self) -> Self {
    self.mul(other)
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn mirror_8(word: u8) -> u8 {
  anorm::<8>::mirror(word)
}

#[unsafe(no_mangle)]
pub fn mirror_12(word: u16) -> u16 {
  anorm::<12>::mirror(word)
}

#[unsafe(no_mangle)]
pub fn mirror_32(word: u32) -> u32 {
  anorm::<32>::mirror(word)
}

#[unsafe(no_mangle)]
pub fn mirror_64(word: u64) -> u64 {
  anorm::<64>::mirror(word)
}

//

#[unsafe(no_mangle)]
pub fn add_anorm_32(x: anorm<32>, y: anorm<32>) -> anorm<32> {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn add_mnorm_32(x: mnorm<32>, y: mnorm<32>) -> mnorm<32> {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn sub_anorm_32(x: anorm<32>, y: anorm<32>) -> anorm<32> {
  x.sub(y)
}

#[unsafe(no_mangle)]
pub fn sub_mnorm_32(x: mnorm<32>, y: mnorm<32>) -> mnorm<32> {
  x.sub(y)
}

//

#[unsafe(no_mangle)]
pub fn mul_anorm_32(x: anorm<32>, y: anorm<32>) -> anorm<32> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn mul_mnorm_32(x: mnorm<32>, y: mnorm<32>) -> mnorm<32> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn mul_anorm_64(x: anorm<64>, y: anorm<64>) -> anorm<64> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn mul_mnorm_64(x: mnorm<64>, y: mnorm<64>) -> mnorm<64> {
  x.mul(y)
}

//

#[unsafe(no_mangle)]
pub fn div_anorm_32(x: anorm<32>, y: anorm<32>) -> anorm<32> {
  x.div(y)
}

#[unsafe(no_mangle)]
pub fn div_mnorm_32(x: mnorm<32>, y: mnorm<32>) -> mnorm<32> {
  x.div(y)
}

//

#[unsafe(no_mangle)]
pub fn from_f32_anorm_32(num: f32) -> anorm<32> {
  anorm::<32>::from_float(num)
}

#[unsafe(no_mangle)]
pub fn from_f32_mnorm_32(num: f32) -> mnorm<32> {
  mnorm::<32>::from_float(num)
}

#[unsafe(no_mangle)]
pub fn from_f64_mnorm_64(num: f64) -> mnorm<64> {
  mnorm::<64>::from_float(num)
}
