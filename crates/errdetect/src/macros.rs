//! Internal macros for variant generation.
//!
//! The named CRC variants differ only in register type and parameter record,
//! and the additive sums only in accumulator type. These macros keep the
//! variants from drifting apart by generating the whole type from those two
//! facts.

/// Generate a named CRC variant with streaming state.
///
/// This macro creates:
/// - The struct definition with `state: <register>`
/// - A `PARAMS` associated constant and a `const fn resume()`
/// - The [`Checksum`](crate::Checksum) trait implementation
///
/// The stored state is the raw bit-serial register; XOR-out and output
/// reflection are applied by `finalize` only, so `finalize` stays idempotent
/// and streaming resumption stays exact.
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($int:ty, $params:expr);
  ) => {
    $(#[$outer])*
    #[derive(Clone, Debug)]
    $vis struct $name {
      state: $int,
    }

    impl $name {
      /// Parameter record this variant is bound to.
      pub const PARAMS: $crate::CrcParams<$int> = $params;

      /// Create a hasher that resumes from a previously finalized CRC.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $int) -> Self {
        let reg = if Self::PARAMS.reflect_out { crc.reverse_bits() } else { crc };
        Self {
          state: reg ^ Self::PARAMS.xor_out,
        }
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = ::core::mem::size_of::<$int>();
      type Output = $int;

      #[inline]
      fn new() -> Self {
        Self {
          state: Self::PARAMS.initial,
        }
      }

      #[inline]
      fn with_initial(initial: $int) -> Self {
        Self {
          state: $crate::bitserial::definalize(&Self::PARAMS, initial),
        }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $crate::bitserial::update(&Self::PARAMS, self.state, data);
      }

      #[inline]
      fn finalize(&self) -> $int {
        $crate::bitserial::finalize(&Self::PARAMS, self.state)
      }

      #[inline]
      fn reset(&mut self) {
        self.state = Self::PARAMS.initial;
      }
    }
  };
}

/// Generate a streaming additive checksum type.
///
/// The state is the running modular sum itself; there is no finalization
/// step, so `finalize` just returns the accumulator.
macro_rules! define_sum_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($int:ty);
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    $vis struct $name {
      state: $int,
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = ::core::mem::size_of::<$int>();
      type Output = $int;

      #[inline]
      fn new() -> Self {
        Self { state: 0 }
      }

      #[inline]
      fn with_initial(initial: $int) -> Self {
        Self { state: initial }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        for &byte in data {
          self.state = self.state.wrapping_add(<$int>::from(byte));
        }
      }

      #[inline]
      fn finalize(&self) -> $int {
        self.state
      }

      #[inline]
      fn reset(&mut self) {
        self.state = 0;
      }
    }
  };
}
