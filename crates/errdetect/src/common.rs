//! Shared helpers.

use traits::Error;

/// View the first `len` bytes of `data`, rejecting out-of-range lengths.
///
/// The public entry points take an explicit length alongside the buffer
/// (callers often hold a partially filled fixed-size frame); this is the
/// single place where that length is validated.
#[inline]
pub(crate) fn bounded(data: &[u8], len: usize) -> Result<&[u8], Error> {
  data.get(..len).ok_or(Error::InvalidLength {
    len,
    available: data.len(),
  })
}
