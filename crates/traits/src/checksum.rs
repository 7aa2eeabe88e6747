//! Streaming error-detection trait.
//!
//! Implemented by every CRC variant and additive checksum in `errdetect`,
//! so one-shot and incremental callers share a single surface.

use core::fmt::Debug;

/// An error-detection value computed over a byte stream.
///
/// # Usage
///
/// ```rust,ignore
/// use errdetect::{Checksum, Crc32IsoHdlc};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32IsoHdlc::checksum(b"123456789");
///
/// // Streaming (for data arriving in pieces)
/// let mut hasher = Crc32IsoHdlc::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not consume the state
/// - `reset()` must restore the state `new()` produces
/// - `with_initial(crc)` followed by no updates must finalize back to `crc`
pub trait Checksum: Clone + Default {
  /// Output size in bytes (1 for 8-bit values, 2 for 16-bit, 4 for 32-bit).
  const OUTPUT_SIZE: usize;

  /// The computed value: `u8`, `u16`, or `u32`.
  type Output: Copy + Eq + Debug + Default;

  /// Create a hasher seeded with the algorithm's initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that resumes from a previously finalized value.
  ///
  /// Feeding it the remainder of a split buffer yields the same result as
  /// hashing the whole buffer in one pass.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Mix `data` into the running state.
  ///
  /// May be called any number of times; the result only depends on the
  /// concatenation of all updates.
  fn update(&mut self, data: &[u8]);

  /// Mix multiple non-contiguous buffers into the running state.
  ///
  /// Identical to calling [`update`](Self::update) on each buffer in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Apply the algorithm's finalization and return the value.
  ///
  /// Does not consume or reset the state; further updates continue from
  /// where the stream left off.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Restore the state `new()` produces.
  fn reset(&mut self);

  /// Compute the value of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the value of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
