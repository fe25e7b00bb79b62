//! Bit-level conversion between the e4m3fn byte encoding and IEEE-754
//! binary32.

/// Smallest binary32 magnitude (as bits) that cannot round back into the
/// finite e4m3fn range: 480.0, the midpoint successor of the maximum finite
/// value 448. Everything at or above it, NaN and infinity included, encodes
/// to the NaN pattern.
const OVERFLOW_BOUND: u32 = 0x43F0_0000;

/// Binary32 bits of 2⁻⁶, the smallest e4m3fn normal. Magnitudes below this
/// produce a subnormal or zero encoding.
const MIN_NORMAL_BOUND: u32 = 121 << 23;

/// Binary32 bits of 2¹⁴. Adding this to a magnitude below 2⁻⁶ places the
/// value in the 2⁻⁹ ulp position of binary32, so the hardware addition
/// performs the round-to-nearest-even into the subnormal grid.
const DENORM_MAGIC: u32 = 141 << 23;

/// Decodes an e4m3fn byte into the exact binary32 value it denotes.
///
/// Total over all 256 patterns, and lossless: binary32 has strictly more
/// range and precision than any finite e4m3fn value.
pub(crate) fn f8_to_f32(bits: u8) -> f32 {
    let sign = ((bits & 0x80) as u32) << 24;
    let exp = ((bits >> 3) & 0x0F) as u32;
    let man = (bits & 0x07) as u32;

    if exp == 0x0F && man == 0x07 {
        // The one reserved pattern per sign. Canonical quiet NaN, sign
        // carried over; the payload is unspecified by the format.
        return f32::from_bits(sign | 0x7FC0_0000);
    }

    let magnitude = if exp == 0 {
        if man == 0 {
            0 // signed zero
        } else {
            // Subnormal: man × 2⁻⁹ renormalized into a binary32 normal.
            let msb = 31 - man.leading_zeros();
            ((118 + msb) << 23) | ((man << (23 - msb)) & 0x007F_FFFF)
        }
    } else {
        // Normal: rebias the exponent (7 → 127), widen the mantissa.
        ((exp + 120) << 23) | (man << 20)
    };
    f32::from_bits(sign | magnitude)
}

/// Encodes a binary32 value into the nearest e4m3fn byte, ties to even.
///
/// NaN, ±infinity, and any magnitude rounding past 448 encode to the NaN
/// pattern of the same sign; the format never saturates to its maximum.
pub(crate) fn f32_to_f8(value: f32) -> u8 {
    let bits = value.to_bits();
    let sign = bits & 0x8000_0000;
    let bits = bits & 0x7FFF_FFFF;

    let magnitude = if bits >= OVERFLOW_BOUND {
        0x7F
    } else if bits < MIN_NORMAL_BOUND {
        // Subnormal or zero result. The addition rounds the value onto the
        // 2⁻⁹ grid; the low bits of the sum are the subnormal encoding, and
        // a mantissa carry into the exponent field yields 2⁻⁶ correctly.
        let rounded = f32::from_bits(bits) + f32::from_bits(DENORM_MAGIC);
        rounded.to_bits() - DENORM_MAGIC
    } else {
        // Normal result: rebias, then round to nearest on the 20 mantissa
        // bits that fall away, adding the kept lsb to break ties to even.
        // A mantissa that rounds past 448 carries into the NaN pattern.
        let odd = (bits >> 20) & 1;
        let rounded = bits - (120 << 23) + 0x0007_FFFF + odd;
        rounded >> 20
    };
    (magnitude | (sign >> 24)) as u8
}
