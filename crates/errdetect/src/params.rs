//! CRC parameter records and a catalogue of standard variants.
//!
//! Parameters follow the conventions of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/): polynomial
//! without the implicit high bit, initial register value, per-byte input
//! reflection, full-width output reflection, and a final XOR mask. Every
//! catalogue entry documents its check value, the CRC of the ASCII bytes
//! `"123456789"`.

/// Parameters defining one CRC variant, generic over the register type.
///
/// A record is plain data: `Copy`, constructible in `const` context, and
/// never mutated by a computation, so one record may serve any number of
/// concurrent computations. Use the [`Crc8Params`], [`Crc16Params`], and
/// [`Crc32Params`] aliases, or their associated constants for the standard
/// variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams<R> {
  /// Generator polynomial (implicit high bit omitted).
  pub polynomial: R,
  /// Initial value of the CRC register.
  pub initial: R,
  /// Reflect each input byte before it enters the register.
  pub reflect_in: bool,
  /// Reflect the final register over the full width, after XOR-out.
  pub reflect_out: bool,
  /// Mask XORed into the register after all bytes are processed.
  pub xor_out: R,
}

/// Parameters for an 8-bit CRC.
pub type Crc8Params = CrcParams<u8>;

/// Parameters for a 16-bit CRC.
pub type Crc16Params = CrcParams<u16>;

/// Parameters for a 32-bit CRC.
pub type Crc32Params = CrcParams<u32>;

impl Crc8Params {
  /// CRC-8/SMBUS — the plain unreflected CRC-8.
  ///
  /// Check: `0xF4`.
  pub const SMBUS: Self = Self {
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
  };

  /// CRC-8/MAXIM-DOW — 1-Wire, iButton.
  ///
  /// Check: `0xA1`.
  pub const MAXIM: Self = Self {
    polynomial: 0x31,
    initial: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
  };
}

impl Crc16Params {
  /// CRC-16/ARC — ARC/IBM, LHA, legacy protocols.
  ///
  /// Check: `0xBB3D`.
  pub const ARC: Self = Self {
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/MODBUS — Modbus RTU.
  ///
  /// Same polynomial and reflection as [`ARC`](Self::ARC) with an all-ones
  /// initial register, so leading zero bytes perturb the result.
  ///
  /// Check: `0x4B37`.
  pub const MODBUS: Self = Self {
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };

  /// CRC-16/CCITT-FALSE (IBM-3740) — X.25-era gear, SD cards, PPP variants.
  ///
  /// Check: `0x29B1`.
  pub const CCITT_FALSE: Self = Self {
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };

  /// CRC-16/XMODEM — XMODEM, ZMODEM, Acorn.
  ///
  /// Check: `0x31C3`.
  pub const XMODEM: Self = Self {
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
  };
}

impl Crc32Params {
  /// CRC-32/ISO-HDLC — Ethernet, gzip, zip, PNG. The ubiquitous CRC-32.
  ///
  /// Check: `0xCBF43926`.
  pub const ISO_HDLC: Self = Self {
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
  };

  /// CRC-32/BZIP2 — bzip2, AAL5. Same polynomial as ISO-HDLC, unreflected.
  ///
  /// Check: `0xFC891918`.
  pub const BZIP2: Self = Self {
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xFFFF_FFFF,
  };
}
