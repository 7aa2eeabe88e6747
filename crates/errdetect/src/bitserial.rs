//! Table-less bit-serial CRC engine.
//!
//! One MSB-first algorithm, generic over the register width, reproduces any
//! standard 8/16/32-bit CRC from a [`CrcParams`] record — no lookup tables,
//! no per-variant code:
//!
//! ```text
//! R = initial
//! for each byte b:
//!   if reflect_in: b = reverse_bits(b)
//!   R ^= b << (width - 8)          // byte enters the register's top byte
//!   repeat 8 times:
//!     if top bit of R set: R = (R << 1) ^ polynomial
//!     else:                R =  R << 1
//! R ^= xor_out
//! if reflect_out: R = reverse_bits(R)
//! ```
//!
//! All shifts operate in an exact `width`-bit register; bits shifted out of
//! the top are discarded.
//!
//! # Finalization order
//!
//! XOR-out is applied *before* output reflection. Some CRC formulations
//! reflect first; the parameter catalogues this engine targets do not, and
//! swapping the two steps changes the result whenever `xor_out` is not
//! palindromic. The order is pinned by tests.
//!
//! # Throughput
//!
//! Bit-serial computation costs 8 register steps per byte. That is the right
//! trade for configurable polynomials on constrained targets: zero table
//! memory, identical code for every variant. Callers that need GB/s on a
//! fixed polynomial want a sliced or carryless-multiply implementation, which
//! is out of scope here.

use core::ops::BitXor;

use traits::Error;

use crate::common;
use crate::params::{Crc16Params, Crc32Params, Crc8Params, CrcParams};

mod sealed {
  pub trait Sealed {}
  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
}

/// Register width capability for the bit-serial engine.
///
/// Implemented for `u8`, `u16`, and `u32`; sealed, since the engine's width
/// set is fixed by the formats it serves.
pub trait Register: Copy + Eq + BitXor<Output = Self> + sealed::Sealed {
  /// Register width in bits.
  const BITS: u8;

  /// Place a byte in the register's most-significant byte position.
  fn from_high_byte(byte: u8) -> Self;

  /// Whether bit `BITS - 1` is set.
  fn top_bit_set(self) -> bool;

  /// Shift left one bit, discarding the bit shifted out of the top.
  fn shl1(self) -> Self;

  /// Reverse bit order over the full register width.
  fn reflect(self) -> Self;
}

macro_rules! impl_register {
  ($int:ty, $bits:expr) => {
    impl Register for $int {
      const BITS: u8 = $bits;

      #[inline]
      fn from_high_byte(byte: u8) -> Self {
        (byte as $int) << ($bits - 8)
      }

      #[inline]
      fn top_bit_set(self) -> bool {
        self >> ($bits - 1) != 0
      }

      #[inline]
      fn shl1(self) -> Self {
        self << 1
      }

      #[inline]
      fn reflect(self) -> Self {
        self.reverse_bits()
      }
    }
  };
}

impl_register!(u8, 8);
impl_register!(u16, 16);
impl_register!(u32, 32);

/// Feed `data` through the bit-serial register. No finalization.
#[inline]
pub(crate) fn update<R: Register>(params: &CrcParams<R>, mut reg: R, data: &[u8]) -> R {
  for &byte in data {
    let byte = if params.reflect_in { byte.reverse_bits() } else { byte };
    reg = reg ^ R::from_high_byte(byte);
    for _ in 0..8 {
      reg = if reg.top_bit_set() {
        reg.shl1() ^ params.polynomial
      } else {
        reg.shl1()
      };
    }
  }
  reg
}

/// Apply XOR-out, then output reflection. See the module docs for why this
/// order must not be swapped.
#[inline]
pub(crate) fn finalize<R: Register>(params: &CrcParams<R>, reg: R) -> R {
  let out = reg ^ params.xor_out;
  if params.reflect_out { out.reflect() } else { out }
}

/// Invert [`finalize`], recovering the raw register from a finalized CRC.
#[inline]
pub(crate) fn definalize<R: Register>(params: &CrcParams<R>, crc: R) -> R {
  let reg = if params.reflect_out { crc.reflect() } else { crc };
  reg ^ params.xor_out
}

/// Compute the CRC described by `params` over the first `len` bytes of `data`.
///
/// Generic entry point behind [`crc8`], [`crc16`], and [`crc32`]. An empty
/// input yields `initial ^ xor_out`, reflected per `reflect_out`. A `len`
/// beyond `data` is rejected with [`Error::InvalidLength`].
#[inline]
pub fn crc<R: Register>(params: &CrcParams<R>, data: &[u8], len: usize) -> Result<R, Error> {
  let data = common::bounded(data, len)?;
  Ok(finalize(params, update(params, params.initial, data)))
}

/// Compute an 8-bit CRC over the first `len` bytes of `data`.
///
/// # Example
///
/// ```
/// use errdetect::{crc8, Crc8Params};
///
/// let crc = crc8(&Crc8Params::SMBUS, b"123456789", 9)?;
/// assert_eq!(crc, 0xF4);
/// # Ok::<(), errdetect::Error>(())
/// ```
#[inline]
pub fn crc8(params: &Crc8Params, data: &[u8], len: usize) -> Result<u8, Error> {
  crc(params, data, len)
}

/// Compute a 16-bit CRC over the first `len` bytes of `data`.
///
/// # Example
///
/// ```
/// use errdetect::{crc16, Crc16Params};
///
/// let crc = crc16(&Crc16Params::MODBUS, b"123456789", 9)?;
/// assert_eq!(crc, 0x4B37);
/// # Ok::<(), errdetect::Error>(())
/// ```
#[inline]
pub fn crc16(params: &Crc16Params, data: &[u8], len: usize) -> Result<u16, Error> {
  crc(params, data, len)
}

/// Compute a 32-bit CRC over the first `len` bytes of `data`.
///
/// # Example
///
/// ```
/// use errdetect::{crc32, Crc32Params};
///
/// let crc = crc32(&Crc32Params::ISO_HDLC, b"123456789", 9)?;
/// assert_eq!(crc, 0xCBF4_3926);
/// # Ok::<(), errdetect::Error>(())
/// ```
#[inline]
pub fn crc32(params: &Crc32Params, data: &[u8], len: usize) -> Result<u32, Error> {
  crc(params, data, len)
}
