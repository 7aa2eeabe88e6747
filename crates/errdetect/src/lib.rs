//! Additive checksums and table-less configurable CRC.
//!
//! This crate computes error-detection values over byte buffers for
//! communication protocols and data-integrity checks on constrained targets.
//! The core is a single bit-serial CRC engine, generic over the register
//! width (8/16/32 bits), that reproduces any standard CRC variant from a
//! [`CrcParams`] record — polynomial, initial value, input/output
//! reflection, final XOR — with zero lookup tables and zero per-variant
//! code. Additive modular byte sums ride along as the cheap peer capability.
//!
//! # Supported Variants
//!
//! | Type | Polynomial | Check (`"123456789"`) | Use Cases |
//! |------|------------|----------------------|-----------|
//! | [`Crc8Smbus`] | 0x07 | 0xF4 | SMBus PEC, ATM HEC |
//! | [`Crc8Maxim`] | 0x31 | 0xA1 | 1-Wire, iButton |
//! | [`Crc16Arc`] | 0x8005 | 0xBB3D | ARC, LHA, legacy protocols |
//! | [`Crc16Modbus`] | 0x8005 | 0x4B37 | Modbus RTU |
//! | [`Crc16CcittFalse`] | 0x1021 | 0x29B1 | SD cards, IBM-3740 |
//! | [`Crc16Xmodem`] | 0x1021 | 0x31C3 | XMODEM, ZMODEM |
//! | [`Crc32IsoHdlc`] | 0x04C11DB7 | 0xCBF43926 | Ethernet, gzip, zip, PNG |
//! | [`Crc32Bzip2`] | 0x04C11DB7 | 0xFC891918 | bzip2, AAL5 |
//!
//! Anything else the catalogue knows is a [`CrcParams`] literal away.
//!
//! # Example
//!
//! ```rust
//! use errdetect::{crc16, crc32, checksum8, Checksum, Crc16Params, Crc32IsoHdlc};
//!
//! let frame = b"123456789";
//!
//! // One-shot, explicit length (rejected if it exceeds the buffer)
//! assert_eq!(crc16(&Crc16Params::MODBUS, frame, frame.len())?, 0x4B37);
//! assert_eq!(checksum8(frame, frame.len())?, 0xDD);
//!
//! // Streaming
//! let mut hasher = Crc32IsoHdlc::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//!
//! // Custom parameters: CRC-32/MPEG-2 is ISO-HDLC unreflected, no XOR-out
//! let mpeg2 = errdetect::Crc32Params {
//!   polynomial: 0x04C1_1DB7,
//!   initial: 0xFFFF_FFFF,
//!   reflect_in: false,
//!   reflect_out: false,
//!   xor_out: 0x0000_0000,
//! };
//! assert_eq!(crc32(&mpeg2, frame, frame.len())?, 0x0376_E6E7);
//! # Ok::<(), errdetect::Error>(())
//! ```
//!
//! # Design
//!
//! - **Table-less**: 8 register steps per byte, zero bytes of tables. The
//!   right trade for configurable polynomials on small targets; fixed-poly
//!   high-throughput kernels are deliberately out of scope.
//! - **Pure**: no global state, no allocation, every input borrowed
//!   read-only. All types are `Send + Sync`; concurrent computations over
//!   shared parameter records are safe by construction.
//! - **Checked**: entry points taking an explicit length fail with
//!   [`Error::InvalidLength`] instead of reading out of bounds, and runtime
//!   reflection widths outside {8, 16, 32} fail with
//!   [`Error::UnsupportedWidth`].
//!
//! # no_std
//!
//! `#![no_std]`, zero dependencies, no features to configure.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Internal macros must be declared before the modules that use them.
#[macro_use]
mod macros;

mod common;
mod variants;

pub mod bitserial;
pub mod params;
pub mod reflect;
pub mod sum;

#[cfg(test)]
mod proptests;

pub use bitserial::{crc, crc16, crc32, crc8, Register};
pub use params::{Crc16Params, Crc32Params, Crc8Params, CrcParams};
pub use reflect::reflect_bits;
pub use sum::{checksum16, checksum32, checksum8, Sum16, Sum32, Sum8};
pub use traits::{Checksum, Error};
pub use variants::{Crc16Arc, Crc16CcittFalse, Crc16Modbus, Crc16Xmodem, Crc32Bzip2, Crc32IsoHdlc, Crc8Maxim, Crc8Smbus};
