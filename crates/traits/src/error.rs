//! Error types for error-detection computations.
//!
//! Minimal, allocation-free validation errors. Every failure is local to the
//! call that produced it: nothing here is fatal, retryable, or transient, and
//! a failed computation never returns a plausible-but-wrong value.

use core::fmt;

/// A checksum or CRC computation was asked to do something invalid.
///
/// # Examples
///
/// ```
/// use traits::Error;
///
/// fn bounded(data: &[u8], len: usize) -> Result<&[u8], Error> {
///   data.get(..len).ok_or(Error::InvalidLength {
///     len,
///     available: data.len(),
///   })
/// }
///
/// assert!(bounded(&[1, 2, 3], 4).is_err());
/// assert_eq!(bounded(&[1, 2, 3], 2), Ok(&[1u8, 2][..]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// The declared length exceeds the supplied buffer.
  ///
  /// Returned instead of reading out of bounds when a caller passes a
  /// `len` larger than the buffer it accompanies.
  InvalidLength {
    /// Length the caller declared.
    len: usize,
    /// Bytes actually available in the buffer.
    available: usize,
  },
  /// Bit reflection was requested for a width outside `{8, 16, 32}`.
  UnsupportedWidth {
    /// The rejected width, in bits.
    bits: u8,
  },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidLength { len, available } => {
        write!(f, "declared length {len} exceeds buffer of {available} bytes")
      }
      Self::UnsupportedWidth { bits } => {
        write!(f, "unsupported reflection width {bits} (expected 8, 16, or 32)")
      }
    }
  }
}

impl core::error::Error for Error {}
