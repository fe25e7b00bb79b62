//! The e4m3fn 8-bit Floating Point Format
//!
//! This crate defines [`F8E4M3`], an 8-bit floating point value with 1 sign
//! bit, 4 exponent bits (bias 7), and 3 mantissa bits, in the finite-only
//! ("fn") variant used by reduced-precision machine-learning workloads.
//!
//! The format has no infinities: the single pattern per sign with all
//! exponent and mantissa bits set (`0x7F`/`0xFF`) is NaN, and every other
//! pattern, including exponent all-ones with other mantissas, is finite,
//! extending the range to ±448.
//!
//! Decoding to [`f32`] is exact and total over all 256 byte patterns.
//! Encoding from [`f32`] rounds to nearest, ties to even; NaN, ±infinity,
//! and anything rounding past ±448 all encode to the NaN pattern (the format
//! never saturates).

mod f8e4m3;
pub use f8e4m3::*;
mod convert;
mod error;
pub use error::*;
