//! Single-axis register pair

use crate::conversion::{counts_to_mms2, counts_to_ms2, sign_extend_14};
use crate::sensors::FullScale;

/// One axis reading as delivered by the `OUT_x_MSB` / `OUT_x_LSB` registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// Most significant register byte
    pub msb: u8,
    /// Least significant register byte
    pub lsb: u8,
}

impl RawSample {
    /// Create from the two register bytes
    #[must_use]
    pub const fn new(msb: u8, lsb: u8) -> Self {
        Self { msb, lsb }
    }

    /// Create from a big-endian byte pair (`[msb, lsb]`)
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self::new(bytes[0], bytes[1])
    }

    /// Create from the combined 16-bit register container
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        let [msb, lsb] = raw.to_be_bytes();
        Self::new(msb, lsb)
    }

    /// Combined 16-bit register container, `msb << 8 | lsb`
    #[must_use]
    pub const fn raw(self) -> u16 {
        u16::from_be_bytes([self.msb, self.lsb])
    }

    /// Signed 14-bit reading in counts (`-8192..=8191`)
    #[must_use]
    pub const fn counts(self) -> i16 {
        sign_extend_14(self.raw())
    }

    /// Acceleration in g
    #[must_use]
    pub fn to_g(self, full_scale: FullScale) -> f32 {
        f32::from(self.counts()) / f32::from(full_scale.counts_per_g())
    }

    /// Acceleration in m/s²
    #[must_use]
    pub fn to_ms2(self, full_scale: FullScale) -> f32 {
        counts_to_ms2(self.counts(), full_scale)
    }

    /// Fixed point acceleration in 10⁻⁴ m/s²
    #[must_use]
    pub const fn to_mms2(self, full_scale: FullScale) -> i32 {
        counts_to_mms2(self.counts(), full_scale)
    }
}

impl From<[u8; 2]> for RawSample {
    fn from(bytes: [u8; 2]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<RawSample> for u16 {
    fn from(sample: RawSample) -> Self {
        sample.raw()
    }
}
