//! Named CRC variants with streaming state.
//!
//! Each type binds the bit-serial engine to one catalogue record from
//! [`crate::params`] and implements [`Checksum`](crate::Checksum). The
//! stored state is the raw register, so updates may be split anywhere and
//! `finalize` stays idempotent.
//!
//! | Type | Polynomial | Check (`"123456789"`) |
//! |------|------------|----------------------|
//! | [`Crc8Smbus`] | 0x07 | 0xF4 |
//! | [`Crc8Maxim`] | 0x31 | 0xA1 |
//! | [`Crc16Arc`] | 0x8005 | 0xBB3D |
//! | [`Crc16Modbus`] | 0x8005 | 0x4B37 |
//! | [`Crc16CcittFalse`] | 0x1021 | 0x29B1 |
//! | [`Crc16Xmodem`] | 0x1021 | 0x31C3 |
//! | [`Crc32IsoHdlc`] | 0x04C11DB7 | 0xCBF43926 |
//! | [`Crc32Bzip2`] | 0x04C11DB7 | 0xFC891918 |

use crate::params::{Crc16Params, Crc32Params, Crc8Params};

define_crc_type! {
  /// CRC-8/SMBUS streaming hasher.
  ///
  /// ```
  /// use errdetect::{Checksum, Crc8Smbus};
  ///
  /// assert_eq!(Crc8Smbus::checksum(b"123456789"), 0xF4);
  /// ```
  pub struct Crc8Smbus(u8, Crc8Params::SMBUS);
}

define_crc_type! {
  /// CRC-8/MAXIM-DOW streaming hasher (1-Wire).
  pub struct Crc8Maxim(u8, Crc8Params::MAXIM);
}

define_crc_type! {
  /// CRC-16/ARC streaming hasher.
  ///
  /// ```
  /// use errdetect::{Checksum, Crc16Arc};
  ///
  /// assert_eq!(Crc16Arc::checksum(b"123456789"), 0xBB3D);
  /// ```
  pub struct Crc16Arc(u16, Crc16Params::ARC);
}

define_crc_type! {
  /// CRC-16/MODBUS streaming hasher.
  pub struct Crc16Modbus(u16, Crc16Params::MODBUS);
}

define_crc_type! {
  /// CRC-16/CCITT-FALSE (IBM-3740) streaming hasher.
  pub struct Crc16CcittFalse(u16, Crc16Params::CCITT_FALSE);
}

define_crc_type! {
  /// CRC-16/XMODEM streaming hasher.
  pub struct Crc16Xmodem(u16, Crc16Params::XMODEM);
}

define_crc_type! {
  /// CRC-32/ISO-HDLC streaming hasher (Ethernet, gzip, PNG).
  ///
  /// ```
  /// use errdetect::{Checksum, Crc32IsoHdlc};
  ///
  /// let mut hasher = Crc32IsoHdlc::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xCBF4_3926);
  /// ```
  pub struct Crc32IsoHdlc(u32, Crc32Params::ISO_HDLC);
}

define_crc_type! {
  /// CRC-32/BZIP2 streaming hasher.
  pub struct Crc32Bzip2(u32, Crc32Params::BZIP2);
}
