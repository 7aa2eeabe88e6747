//! Differential fuzzing against a well-established CRC crate.
//!
//! Compares the bit-serial engine's catalogue variants against `crc-fast`
//! and checks streaming self-consistency on the way.

#![no_main]

use errdetect::{crc16, crc32, Checksum, Crc16Params, Crc32IsoHdlc, Crc32Params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc32_differential(data);
  test_crc16_differential(data);
  test_sum_reference(data);
});

fn test_crc32_differential(data: &[u8]) {
  let ours = crc32(&Crc32Params::ISO_HDLC, data, data.len()).unwrap();
  let reference = crc_fast::checksum(crc_fast::CrcAlgorithm::Crc32IsoHdlc, data) as u32;

  assert_eq!(
    ours,
    reference,
    "CRC-32/ISO-HDLC differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours,
    reference,
    data.len()
  );

  // Self-consistency: streaming through the variant type must match one-shot.
  let mut hasher = Crc32IsoHdlc::new();
  for chunk in data.chunks(13) {
    hasher.update(chunk);
  }
  assert_eq!(hasher.finalize(), ours, "CRC-32 streaming self-consistency mismatch");
}

fn test_crc16_differential(data: &[u8]) {
  let ours = crc16(&Crc16Params::ARC, data, data.len()).unwrap();
  let reference = crc_fast::checksum(crc_fast::CrcAlgorithm::Crc16Arc, data) as u16;

  assert_eq!(
    ours,
    reference,
    "CRC-16/ARC differential mismatch: ours={:#06x}, reference={:#06x}, len={}",
    ours,
    reference,
    data.len()
  );
}

fn test_sum_reference(data: &[u8]) {
  let wide: u64 = data.iter().map(|&b| u64::from(b)).sum();
  assert_eq!(errdetect::checksum8(data, data.len()).unwrap(), (wide % (1u64 << 8)) as u8);
  assert_eq!(errdetect::checksum16(data, data.len()).unwrap(), (wide % (1u64 << 16)) as u16);
  assert_eq!(errdetect::checksum32(data, data.len()).unwrap(), (wide % (1u64 << 32)) as u32);
}
