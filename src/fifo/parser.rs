//! FIFO data parsing
//!
//! Splits a drained FIFO buffer into three-axis frames and converts them with the
//! configured full-scale range.

use super::{FIFO_CAPACITY, FRAME_SIZE, complete_frames};
use crate::Error;
use crate::sensors::{AccelConfig, AccelData, AccelDataMms2, AccelDataMs2};

/// FIFO data parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoParser {
    /// Configuration used for conversion
    config: AccelConfig,
}

impl FifoParser {
    /// Create a new FIFO parser with the given configuration
    ///
    /// # Arguments
    /// * `config` - Range the samples were taken at
    #[must_use]
    pub const fn new(config: &AccelConfig) -> Self {
        Self { config: *config }
    }

    /// Get the configuration used for conversion
    #[must_use]
    pub const fn config(&self) -> &AccelConfig {
        &self.config
    }

    /// Parse raw FIFO data into decoded frames
    ///
    /// Only complete frames are decoded. Trailing bytes of a partial frame are
    /// ignored.
    ///
    /// # Errors
    /// Returns `FifoOverflow` if there are more than 32 complete frames.
    pub fn parse(&self, data: &[u8]) -> Result<heapless::Vec<AccelData, FIFO_CAPACITY>, Error> {
        let num_frames = complete_frames(data.len());
        if num_frames > FIFO_CAPACITY {
            return Err(Error::FifoOverflow);
        }

        #[cfg(feature = "defmt")]
        if data.len() % FRAME_SIZE != 0 {
            defmt::warn!(
                "FIFO buffer has {=usize} trailing bytes, ignoring partial frame",
                data.len() % FRAME_SIZE
            );
        }

        let mut frames = heapless::Vec::new();
        for chunk in data.chunks_exact(FRAME_SIZE) {
            let frame = AccelData::try_from(chunk)?;
            frames.push(frame).map_err(|_| Error::FifoOverflow)?;
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("Parsed {=usize} FIFO frames", frames.len());

        Ok(frames)
    }

    /// Parse raw FIFO data and convert each frame to m/s²
    ///
    /// # Errors
    /// Returns `FifoOverflow` if there are more than 32 complete frames.
    pub fn parse_ms2(
        &self,
        data: &[u8],
    ) -> Result<heapless::Vec<AccelDataMs2, FIFO_CAPACITY>, Error> {
        let frames = self.parse(data)?;
        Ok(frames
            .iter()
            .map(|frame| frame.to_ms2(self.config.full_scale))
            .collect())
    }

    /// Parse raw FIFO data and convert each frame to fixed point 10⁻⁴ m/s²
    ///
    /// # Errors
    /// Returns `FifoOverflow` if there are more than 32 complete frames.
    pub fn parse_mms2(
        &self,
        data: &[u8],
    ) -> Result<heapless::Vec<AccelDataMms2, FIFO_CAPACITY>, Error> {
        let frames = self.parse(data)?;
        Ok(frames
            .iter()
            .map(|frame| frame.to_mms2(self.config.full_scale))
            .collect())
    }
}
