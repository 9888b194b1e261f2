//! Errors raised by unorm arithmetic.

use thiserror::Error;

/// The error type for fallible unorm operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
  /// The divisor's word was zero.
  #[error("attempt to divide a unorm by zero")]
  DivisionByZero,
}

/// Short for `core::result::Result<T, unorm::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
