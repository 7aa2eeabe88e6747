//! Core traits for error-detection computations.
//!
//! This crate provides the foundational pieces that the `errdetect`
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming error-detection values (CRC variants, additive sums) |
//! | [`Error`] | Validation failures (bad length, bad reflection width) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;
pub mod error;

pub use checksum::Checksum;
pub use error::Error;
