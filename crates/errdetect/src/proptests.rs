extern crate std;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use crate::params::{Crc16Params, Crc32Params, CrcParams};
use crate::{checksum16, checksum8, crc16, crc32, reflect_bits, Checksum, Crc16Arc, Crc32IsoHdlc, Error, Sum8};

/// Independently written LSB-first reference for fully reflected parameters.
///
/// An MSB-first engine with `reflect_in = reflect_out = true` is equivalent
/// to an LSB-first register over the reflected polynomial with reflected
/// initial value and reflected XOR mask.
fn lsb_first16(poly_reflected: u16, init_reflected: u16, xor_reflected: u16, data: &[u8]) -> u16 {
  let mut crc = init_reflected;
  for &b in data {
    crc ^= u16::from(b);
    for _ in 0..8 {
      let mask = 0u16.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & mask);
    }
  }
  crc ^ xor_reflected
}

proptest! {
  #[test]
  fn crc32_iso_hdlc_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = crc32(&Crc32Params::ISO_HDLC, &data, data.len()).unwrap();
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc16_arc_matches_crc_fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = crc16(&Crc16Params::ARC, &data, data.len()).unwrap();
    let reference = crc_fast::checksum(CrcAlgorithm::Crc16Arc, &data) as u16;
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn crc32_streaming_matches_crc_fast(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut ours = Crc32IsoHdlc::new();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32IsoHdlc);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u32);
  }

  #[test]
  fn reflected_params_match_lsb_first_reference(
    polynomial in any::<u16>(),
    initial in any::<u16>(),
    xor_out in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    let params = CrcParams { polynomial, initial, reflect_in: true, reflect_out: true, xor_out };
    let ours = crc16(&params, &data, data.len()).unwrap();
    let reference = lsb_first16(
      polynomial.reverse_bits(),
      initial.reverse_bits(),
      xor_out.reverse_bits(),
      &data,
    );
    prop_assert_eq!(ours, reference);
  }

  #[test]
  fn empty_input_is_initial_xor_xorout(
    polynomial in any::<u16>(),
    initial in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_out in any::<u16>()
  ) {
    let params = CrcParams { polynomial, initial, reflect_in, reflect_out, xor_out };
    let expected = if reflect_out { (initial ^ xor_out).reverse_bits() } else { initial ^ xor_out };
    prop_assert_eq!(crc16(&params, &[], 0).unwrap(), expected);
  }

  #[test]
  fn crc_is_deterministic(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let a = crc32(&Crc32Params::ISO_HDLC, &data, data.len()).unwrap();
    let b = crc32(&Crc32Params::ISO_HDLC, &data, data.len()).unwrap();
    prop_assert_eq!(a, b);
  }

  #[test]
  fn resume_matches_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<proptest::sample::Index>()
  ) {
    let split = split.index(data.len() + 1);
    let (a, b) = data.split_at(split);

    let mut resumed = Crc16Arc::resume(Crc16Arc::checksum(a));
    resumed.update(b);
    prop_assert_eq!(resumed.finalize(), Crc16Arc::checksum(&data));
  }

  #[test]
  fn sum_is_order_insensitive(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let mut data = data;
    let forward = checksum16(&data, data.len()).unwrap();
    data.reverse();
    prop_assert_eq!(checksum16(&data, data.len()).unwrap(), forward);
  }

  #[test]
  fn sum8_matches_wide_reference(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let wide: u64 = data.iter().map(|&b| u64::from(b)).sum();
    prop_assert_eq!(checksum8(&data, data.len()).unwrap(), (wide % 256) as u8);
    prop_assert_eq!(u64::from(Sum8::checksum(&data)), wide % 256);
  }

  #[test]
  fn reflection_is_an_involution(value in any::<u32>()) {
    for width in [8u8, 16, 32] {
      let once = reflect_bits(value, width).unwrap();
      let twice = reflect_bits(once, width).unwrap();
      let masked = if width == 32 { value } else { value & ((1 << width) - 1) };
      prop_assert_eq!(twice, masked);
    }
  }

  #[test]
  fn invalid_length_is_rejected_not_read(
    data in proptest::collection::vec(any::<u8>(), 0..=64),
    excess in 1usize..=16
  ) {
    let len = data.len() + excess;
    let expected = Error::InvalidLength { len, available: data.len() };
    prop_assert_eq!(crc32(&Crc32Params::ISO_HDLC, &data, len), Err(expected));
    prop_assert_eq!(checksum8(&data, len), Err(expected));
  }
}
