//! Bit reflection.
//!
//! Some CRC standards process bytes least-significant-bit first. Rather than
//! maintaining a second, mirrored engine, those standards are expressed by
//! reflecting input bytes and/or the final register of the one MSB-first
//! engine in [`crate::bitserial`].
//!
//! Reflection reverses a value's bits end-to-end within its width: bit `i`
//! of the output equals bit `width - 1 - i` of the input.

use traits::Error;

/// Reverse the low `bit_width` bits of `value`.
///
/// Bits above `bit_width` are ignored on input and zero on output. Widths
/// other than 8, 16, and 32 are rejected with [`Error::UnsupportedWidth`];
/// code that knows its width statically should prefer the inherent
/// `u8::reverse_bits` / `u16::reverse_bits` / `u32::reverse_bits`, which is
/// what the CRC engine does internally.
///
/// # Example
///
/// ```
/// use errdetect::reflect_bits;
///
/// assert_eq!(reflect_bits(0x01, 8), Ok(0x80));
/// assert_eq!(reflect_bits(0x8005, 16), Ok(0xA001));
/// assert_eq!(reflect_bits(0x04C11DB7, 32), Ok(0xEDB88320));
/// assert!(reflect_bits(0, 24).is_err());
/// ```
#[inline]
pub const fn reflect_bits(value: u32, bit_width: u8) -> Result<u32, Error> {
  match bit_width {
    8 => Ok((value as u8).reverse_bits() as u32),
    16 => Ok((value as u16).reverse_bits() as u32),
    32 => Ok(value.reverse_bits()),
    bits => Err(Error::UnsupportedWidth { bits }),
  }
}
