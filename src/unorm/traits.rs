use super::*;

// Deriving would bound the impls on `O: Clone`, `O: PartialEq`, etc., and on the projection
// `UintFor<P>` rather than on `Width<P>: NarrowestUnsigned`, so we implement explicitly here.
//
// Equality and hashing are over the stored word; two unorms are equal iff their words are. No
// `Ord`: the native integer order of a Reversed word is not the order of the values it stands
// for.

impl<const P: u32, O: Orientation>
Clone for Unorm<P, O> where Width<P>: NarrowestUnsigned {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const P: u32, O: Orientation>
Copy for Unorm<P, O> where Width<P>: NarrowestUnsigned {}

impl<const P: u32, O: Orientation>
PartialEq for Unorm<P, O> where Width<P>: NarrowestUnsigned {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.word == other.word
  }
}

impl<const P: u32, O: Orientation>
Eq for Unorm<P, O> where Width<P>: NarrowestUnsigned {}

impl<const P: u32, O: Orientation>
core::hash::Hash for Unorm<P, O> where Width<P>: NarrowestUnsigned {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    core::hash::Hash::hash(&self.word, state);
  }
}

impl<const P: u32, O: Orientation>
Default for Unorm<P, O> where Width<P>: NarrowestUnsigned {
  /// The zero word, [`Unorm::MIN`].
  #[inline]
  fn default() -> Self {
    Self::MIN
  }
}
