#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod conversion;
pub mod sample;
pub mod sensors;

pub mod fifo;

// Re-export main types
pub use conversion::{
    COUNTS_PER_G, FIXED_POINT_SCALE, STANDARD_GRAVITY, STANDARD_GRAVITY_X100K, counts_to_mms2,
    counts_to_ms2, raw_to_acceleration_mms2, raw_to_acceleration_ms2, sign_extend_14,
};
pub use fifo::{FIFO_CAPACITY, FRAME_SIZE, FifoParser};
pub use sample::RawSample;
pub use sensors::{AccelConfig, AccelData, AccelDataMms2, AccelDataMs2, FullScale};

/// Decoding errors
///
/// Only the buffer-based decoders can fail. The two-byte conversions are
/// total over their input domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Slice length does not match one axis frame (contains the actual length)
    InvalidLength(usize),
    /// FIFO buffer holds more frames than the sensor FIFO can store (max 32)
    FifoOverflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected a {FRAME_SIZE}-byte frame, got {len} bytes")
            }
            Self::FifoOverflow => write!(f, "more than {FIFO_CAPACITY} frames in FIFO buffer"),
        }
    }
}

impl core::error::Error for Error {}
