//! Raw register to physical unit conversion
//!
//! The accelerometer reports one axis as a 14-bit two's-complement value carried
//! in a big-endian MSB/LSB register pair. At ±2g one g is 4096 counts, so one
//! count is roughly 0.25 mg.
//!
//! Two output forms are provided:
//! - [`raw_to_acceleration_ms2`]: floating point m/s²
//! - [`raw_to_acceleration_mms2`]: fixed point integer, computed without touching floats
//!
//! The integer form counts in units of 10⁻⁴ m/s² (tenths of mm/s²), i.e.
//! [`FIXED_POINT_SCALE`] units per m/s². One count at ±2g is `23` of them.
//!
//! Both are thin wrappers around [`sign_extend_14`] and the range-aware
//! [`counts_to_ms2`] / [`counts_to_mms2`] at [`FullScale::G2`].

use crate::sensors::FullScale;

/// Counts per g at ±2g with 14-bit resolution
pub const COUNTS_PER_G: u16 = 4096;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Standard gravity in units of 10⁻⁵ m/s²
pub const STANDARD_GRAVITY_X100K: i64 = 980_665;

/// Integer output units per m/s²
pub const FIXED_POINT_SCALE: i32 = 10_000;

/// Sign-extend the 14-bit field of a register pair into an `i16`
///
/// The two high bits of the container are shifted out, then an arithmetic shift
/// back down propagates bit 13 through the top of the `i16`. The result is always
/// in `-8192..=8191`.
#[must_use]
pub const fn sign_extend_14(raw: u16) -> i16 {
    // Reinterpreting the shifted container as signed is the point here
    #[allow(clippy::cast_possible_wrap)]
    let shifted = (raw << 2) as i16;
    shifted >> 2
}

/// Convert signed counts to m/s² for the given full-scale range
///
/// Evaluated as `counts * (1 / counts_per_g) * g`, sensitivity first.
#[must_use]
pub fn counts_to_ms2(counts: i16, full_scale: FullScale) -> f32 {
    let sensitivity = 1.0 / f32::from(full_scale.counts_per_g());
    f32::from(counts) * sensitivity * STANDARD_GRAVITY
}

/// Convert signed counts to fixed point acceleration for the given full-scale range
///
/// Result is in 10⁻⁴ m/s² ([`FIXED_POINT_SCALE`] per m/s²). Uses a 64-bit
/// intermediate; division truncates toward zero.
#[must_use]
// |counts| <= 8192 and counts_per_g >= 1024, so the quotient stays within ±785k
#[allow(clippy::cast_possible_truncation)]
pub const fn counts_to_mms2(counts: i16, full_scale: FullScale) -> i32 {
    let numerator = counts as i64 * STANDARD_GRAVITY_X100K;
    let denominator = full_scale.counts_per_g() as i64 * 10;
    (numerator / denominator) as i32
}

/// Convert an MSB/LSB register pair to acceleration in m/s² (±2g range)
///
/// Every one of the 65536 possible byte pairs yields a finite value.
///
/// # Example
///
/// ```
/// let a = mma8451q::raw_to_acceleration_ms2(0b01_1111, 0b1111_1111);
/// assert!((a - 19.610_906).abs() < 0.0024);
/// ```
#[must_use]
pub fn raw_to_acceleration_ms2(msb: u8, lsb: u8) -> f32 {
    let raw = u16::from_be_bytes([msb, lsb]);
    counts_to_ms2(sign_extend_14(raw), FullScale::G2)
}

/// Convert an MSB/LSB register pair to fixed point acceleration (±2g range)
///
/// Integer only, in 10⁻⁴ m/s². The result truncates toward zero, so one count
/// (23.94 units) reads as `23` and minus one count as `-23`.
///
/// # Example
///
/// ```
/// assert_eq!(mma8451q::raw_to_acceleration_mms2(0b10_0000, 0b0000_0000), -196_133);
/// ```
#[must_use]
pub const fn raw_to_acceleration_mms2(msb: u8, lsb: u8) -> i32 {
    let raw = u16::from_be_bytes([msb, lsb]);
    counts_to_mms2(sign_extend_14(raw), FullScale::G2)
}
