//! Accelerometer range configuration and three-axis data types
//!
//! A burst read starting at `OUT_X_MSB` yields six bytes, one MSB/LSB pair per
//! axis. [`AccelData`] holds the decoded counts; [`AccelDataMs2`] and
//! [`AccelDataMms2`] hold the converted values.

use crate::Error;
use crate::conversion::{counts_to_mms2, counts_to_ms2};
use crate::fifo::FRAME_SIZE;
use crate::sample::RawSample;

/// Accelerometer full-scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FullScale {
    /// ±2g range (most sensitive, least range)
    #[default]
    G2 = 0,
    /// ±4g range
    G4 = 1,
    /// ±8g range (least sensitive, most range)
    G8 = 2,
}

impl FullScale {
    /// Get the sensitivity in counts per g for 14-bit readings
    #[must_use]
    pub const fn counts_per_g(self) -> u16 {
        match self {
            Self::G2 => 4096,
            Self::G4 => 2048,
            Self::G8 => 1024,
        }
    }

    /// Get the maximum value in g
    #[must_use]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
        }
    }
}

/// Conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// Full-scale range the sensor was sampled at
    pub full_scale: FullScale,
}

impl AccelConfig {
    /// Create a configuration for the given range
    #[must_use]
    pub const fn new(full_scale: FullScale) -> Self {
        Self { full_scale }
    }
}

/// Decoded three-axis reading in signed 14-bit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelData {
    /// X-axis counts
    pub x: i16,
    /// Y-axis counts
    pub y: i16,
    /// Z-axis counts
    pub z: i16,
}

impl AccelData {
    /// Decode a burst of `[X_MSB, X_LSB, Y_MSB, Y_LSB, Z_MSB, Z_LSB]`
    #[must_use]
    pub const fn from_bytes(data: [u8; FRAME_SIZE]) -> Self {
        Self {
            x: RawSample::new(data[0], data[1]).counts(),
            y: RawSample::new(data[2], data[3]).counts(),
            z: RawSample::new(data[4], data[5]).counts(),
        }
    }

    /// Convert every axis to m/s²
    #[must_use]
    pub fn to_ms2(&self, full_scale: FullScale) -> AccelDataMs2 {
        AccelDataMs2 {
            x: counts_to_ms2(self.x, full_scale),
            y: counts_to_ms2(self.y, full_scale),
            z: counts_to_ms2(self.z, full_scale),
        }
    }

    /// Convert every axis to fixed point 10⁻⁴ m/s²
    #[must_use]
    pub const fn to_mms2(&self, full_scale: FullScale) -> AccelDataMms2 {
        AccelDataMms2 {
            x: counts_to_mms2(self.x, full_scale),
            y: counts_to_mms2(self.y, full_scale),
            z: counts_to_mms2(self.z, full_scale),
        }
    }
}

impl From<[u8; FRAME_SIZE]> for AccelData {
    fn from(data: [u8; FRAME_SIZE]) -> Self {
        Self::from_bytes(data)
    }
}

impl TryFrom<&[u8]> for AccelData {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let frame: [u8; FRAME_SIZE] = data
            .try_into()
            .map_err(|_| Error::InvalidLength(data.len()))?;
        Ok(Self::from_bytes(frame))
    }
}

/// Accelerometer data in m/s²
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataMs2 {
    /// X-axis acceleration in m/s²
    pub x: f32,
    /// Y-axis acceleration in m/s²
    pub y: f32,
    /// Z-axis acceleration in m/s²
    pub z: f32,
}

impl AccelDataMs2 {
    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Normalize the acceleration vector (make magnitude = 1.0)
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        } else {
            *self
        }
    }
}

/// Accelerometer data in fixed point 10⁻⁴ m/s²
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataMms2 {
    /// X-axis acceleration
    pub x: i32,
    /// Y-axis acceleration
    pub y: i32,
    /// Z-axis acceleration
    pub z: i32,
}

impl AccelDataMms2 {
    /// Squared magnitude, kept in integer arithmetic
    #[must_use]
    pub const fn magnitude_squared(&self) -> i64 {
        let (x, y, z) = (self.x as i64, self.y as i64, self.z as i64);
        x * x + y * y + z * z
    }
}
