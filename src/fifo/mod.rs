//! FIFO buffer decoding
//!
//! The MMA8451Q has a 32-sample FIFO. Each sample is stored as a 6-byte
//! three-axis frame in the same layout as a burst read from `OUT_X_MSB`. Draining
//! the FIFO is the caller's job; this module decodes the bytes once they are
//! in memory.
//!
//! # Example
//!
//! ```
//! # use mma8451q::{AccelConfig, FullScale, fifo::FifoParser};
//! let parser = FifoParser::new(&AccelConfig::new(FullScale::G4));
//!
//! // Two frames drained from the FIFO
//! let buffer = [
//!     0x00, 0x00, 0x00, 0x00, 0x08, 0x00, // flat, +1 g on Z at ±4g
//!     0x00, 0x00, 0x00, 0x00, 0x38, 0x00, // upside down, -1 g on Z
//! ];
//!
//! let frames = parser.parse_mms2(&buffer)?;
//! assert_eq!(frames[0].z, 98_066);
//! assert_eq!(frames[1].z, -98_066);
//! # Ok::<(), mma8451q::Error>(())
//! ```

pub mod parser;

pub use parser::FifoParser;

/// FIFO depth in samples
pub const FIFO_CAPACITY: usize = 32;

/// Bytes per three-axis frame (MSB/LSB for X, Y and Z)
pub const FRAME_SIZE: usize = 6;

/// Number of complete frames in a buffer of `len` bytes
#[must_use]
pub const fn complete_frames(len: usize) -> usize {
    len / FRAME_SIZE
}
