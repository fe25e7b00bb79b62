use core::fmt;
use core::str::FromStr;

use crate::convert;
use crate::{Error, Result};

/// An 8-bit floating point value in the finite-only e4m3fn interchange
/// format: 1 sign bit, 4 exponent bits with bias 7, 3 mantissa bits.
///
/// The byte is the interchange representation: the bit layout is fixed, so
/// values persist and transmit as-is. Equality and hashing follow the bit
/// pattern, making this a pure value type; the NaN patterns compare equal
/// to themselves, and `+0.0`/`-0.0` are distinct bytes.
///
/// Conversions to and from [`f32`] are explicit, named operations; there is
/// deliberately no implicit widening that could mask precision loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct F8E4M3(u8);

impl F8E4M3 {
    // ───────────────────────────── Constants ────────────────────────────────

    /// Positive zero (`0x00`).
    pub const ZERO: Self = Self(0x00);
    /// Negative zero (`0x80`).
    pub const NEG_ZERO: Self = Self(0x80);
    /// One (`0x38`).
    pub const ONE: Self = Self(0x38);
    /// Largest finite value, 448 (`0x7E`).
    pub const MAX: Self = Self(0x7E);
    /// Smallest finite value, −448 (`0xFE`).
    pub const MIN: Self = Self(0xFE);
    /// Smallest positive normal value, 2⁻⁶ (`0x08`).
    pub const MIN_POSITIVE: Self = Self(0x08);
    /// Difference between 1 and the next representable value, 2⁻³ (`0x20`).
    pub const EPSILON: Self = Self(0x20);
    /// The positive NaN pattern (`0x7F`).
    pub const NAN: Self = Self(0x7F);

    // ───────────────────────────── Constructors ─────────────────────────────

    /// Constructs a value from its raw byte encoding. All 256 patterns are
    /// meaningful, so this never fails.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Encodes a binary32 value, rounding to nearest with ties to even.
    ///
    /// This operation is lossy. NaN encodes to the NaN pattern with its sign
    /// preserved. ±infinity and any magnitude that rounds past ±448 also
    /// encode to the NaN pattern of the same sign: the finite-only format
    /// has no infinities and does not saturate. Magnitudes below 2⁻⁶ become
    /// subnormals or signed zero.
    pub fn from_f32(value: f32) -> Self {
        Self(convert::f32_to_f8(value))
    }

    /// Encodes a binary32 value, failing if the encoding would change it.
    ///
    /// NaN input is accepted (NaN-ness survives the round trip); infinity
    /// and any value needing rounding are rejected with [`Error::Inexact`].
    pub fn from_f32_exact(value: f32) -> Result<Self> {
        let encoded = Self::from_f32(value);
        let back = encoded.to_f32();
        if back == value || (back.is_nan() && value.is_nan()) {
            Ok(encoded)
        } else {
            Err(Error::Inexact(value))
        }
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    /// Returns the raw byte encoding.
    pub const fn to_bits(self) -> u8 {
        self.0
    }

    /// Decodes to the exact binary32 value this byte denotes.
    ///
    /// Lossless and total: binary32 represents every finite e4m3fn value
    /// exactly, and the NaN patterns decode to a quiet NaN of the same sign.
    pub fn to_f32(self) -> f32 {
        convert::f8_to_f32(self.0)
    }

    /// Returns the sign bit (true if set).
    pub const fn sign(self) -> bool {
        self.0 >> 7 == 1
    }

    /// Returns the 4-bit biased exponent field.
    pub const fn exponent_bits(self) -> u8 {
        (self.0 >> 3) & 0x0F
    }

    /// Returns the 3-bit mantissa field.
    pub const fn mantissa_bits(self) -> u8 {
        self.0 & 0x07
    }

    /// Returns true for the two NaN patterns (`0x7F`, `0xFF`).
    pub const fn is_nan(self) -> bool {
        self.0 & 0x7F == 0x7F
    }

    /// Returns true for positive and negative zero.
    pub const fn is_zero(self) -> bool {
        self.0 & 0x7F == 0
    }

    /// Returns true for subnormal values (exponent field zero, mantissa
    /// nonzero; the implicit leading bit is 0).
    pub const fn is_subnormal(self) -> bool {
        self.exponent_bits() == 0 && self.mantissa_bits() != 0
    }

    /// Returns true if the sign bit is set, including for `-0.0` and the
    /// negative NaN pattern.
    pub const fn is_sign_negative(self) -> bool {
        self.sign()
    }
}

// ───────────────────────────────── Display ──────────────────────────────────

/// Renders the value exactly as its decoded binary32 value renders: the
/// text is defined entirely by `to_f32` plus the standard float formatter,
/// with no formatting rules of its own. NaN prints as binary32 NaN prints.
impl fmt::Display for F8E4M3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

// ───────────────────────────────── Parsing ──────────────────────────────────

impl FromStr for F8E4M3 {
    type Err = Error;

    /// Parses a float literal as binary32, then encodes it. Rounding and
    /// overflow follow [`F8E4M3::from_f32`].
    fn from_str(src: &str) -> Result<Self> {
        Ok(Self::from_f32(src.parse::<f32>()?))
    }
}
