//! Additive checksums.
//!
//! Plain modular byte sums: weaker than any CRC (they cannot see byte
//! reordering) but a fraction of the cost, which keeps them in service in
//! simple frame formats. The accumulator wraps at the output width on every
//! addition; there is no seed and no finalization.

use traits::Error;

use crate::common;

/// Sum the first `len` bytes of `data` modulo 2^8.
///
/// # Example
///
/// ```
/// use errdetect::checksum8;
///
/// assert_eq!(checksum8(&[0x01, 0x02, 0x03], 3), Ok(0x06));
/// assert_eq!(checksum8(&[0xFF, 0x01], 2), Ok(0x00)); // wraps at 256
/// ```
#[inline]
pub fn checksum8(data: &[u8], len: usize) -> Result<u8, Error> {
  let data = common::bounded(data, len)?;
  Ok(data.iter().fold(0u8, |sum, &b| sum.wrapping_add(b)))
}

/// Sum the first `len` bytes of `data` modulo 2^16.
#[inline]
pub fn checksum16(data: &[u8], len: usize) -> Result<u16, Error> {
  let data = common::bounded(data, len)?;
  Ok(data.iter().fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b))))
}

/// Sum the first `len` bytes of `data` modulo 2^32.
#[inline]
pub fn checksum32(data: &[u8], len: usize) -> Result<u32, Error> {
  let data = common::bounded(data, len)?;
  Ok(data.iter().fold(0u32, |sum, &b| sum.wrapping_add(u32::from(b))))
}

define_sum_type! {
  /// Streaming 8-bit additive checksum.
  ///
  /// The streaming counterpart of [`checksum8`].
  pub struct Sum8(u8);
}

define_sum_type! {
  /// Streaming 16-bit additive checksum.
  ///
  /// The streaming counterpart of [`checksum16`].
  pub struct Sum16(u16);
}

define_sum_type! {
  /// Streaming 32-bit additive checksum.
  ///
  /// The streaming counterpart of [`checksum32`].
  pub struct Sum32(u32);
}

#[cfg(test)]
mod tests {
  extern crate std;

  use traits::Checksum;

  use super::*;

  #[test]
  fn empty_input_is_zero() {
    assert_eq!(checksum8(&[], 0), Ok(0));
    assert_eq!(checksum16(&[], 0), Ok(0));
    assert_eq!(checksum32(&[], 0), Ok(0));
  }

  #[test]
  fn sums_bytes_in_any_order() {
    let data = [0x10u8, 0x20, 0x30, 0x40];
    let reversed = [0x40u8, 0x30, 0x20, 0x10];
    assert_eq!(checksum8(&data, 4), Ok(0xA0));
    assert_eq!(checksum8(&data, 4), checksum8(&reversed, 4));
  }

  #[test]
  fn wraps_at_width() {
    // 256 decimal split across two bytes wraps an 8-bit sum to zero.
    assert_eq!(checksum8(&[0xFF, 0x01], 2), Ok(0x00));
    // ...while the wider sums still see the carry.
    assert_eq!(checksum16(&[0xFF, 0x01], 2), Ok(0x0100));
    assert_eq!(checksum32(&[0xFF, 0x01], 2), Ok(0x0000_0100));
  }

  #[test]
  fn wraps_every_addition_not_just_at_the_end() {
    // Truncate-every-step semantics: 8-bit sum of 0xFF + 0xFF + 0x02.
    assert_eq!(checksum8(&[0xFF, 0xFF, 0x02], 3), Ok(0x00));
  }

  #[test]
  fn rejects_length_beyond_buffer() {
    let err = Error::InvalidLength { len: 3, available: 2 };
    assert_eq!(checksum8(&[1, 2], 3), Err(err));
    assert_eq!(checksum16(&[1, 2], 3), Err(err));
    assert_eq!(checksum32(&[1, 2], 3), Err(err));
  }

  #[test]
  fn length_selects_prefix() {
    assert_eq!(checksum16(&[1, 2, 3, 4], 2), Ok(3));
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data = b"additive checksums are order-insensitive";
    let oneshot = checksum16(data, data.len()).unwrap();

    let mut sum = Sum16::new();
    for chunk in data.chunks(7) {
      sum.update(chunk);
    }
    assert_eq!(sum.finalize(), oneshot);

    sum.reset();
    assert_eq!(sum.finalize(), 0);
  }

  #[test]
  fn resume_from_previous_sum() {
    let (a, b) = (&[1u8, 2, 3][..], &[4u8, 5][..]);
    let whole = Sum8::checksum(&[1, 2, 3, 4, 5]);

    let mut resumed = Sum8::with_initial(Sum8::checksum(a));
    resumed.update(b);
    assert_eq!(resumed.finalize(), whole);
  }

  #[test]
  fn wraparound_at_2_16() {
    // 65536 bytes of 0x01 wrap a 16-bit sum to zero.
    let data = std::vec![1u8; 1 << 16];
    assert_eq!(checksum16(&data, data.len()), Ok(0));
    assert_eq!(checksum32(&data, data.len()), Ok(0x0001_0000));
  }

  #[test]
  fn wraparound_at_2_32_via_resume() {
    // 2^32 bytes is impractical to materialize; resume just below the wrap.
    let mut sum = Sum32::with_initial(u32::MAX);
    sum.update(&[1]);
    assert_eq!(sum.finalize(), 0);
  }
}
