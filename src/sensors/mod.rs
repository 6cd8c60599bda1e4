//! Sensor data types
//!
//! The MMA8451Q is a single 3-axis accelerometer, so this holds one module:
//! full-scale range, conversion configuration and three-axis data types.

pub mod accelerometer;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelData, AccelDataMms2, AccelDataMs2, FullScale};
