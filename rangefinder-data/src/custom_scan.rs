#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a custom scan sweep, as set on the custom scan console.
///
/// Only the angular bounds and the step are transmitted. Scan frequency and
/// samples per orientation are collected by the console but the firmware
/// message has no field for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomScanParams {
    pub azimuth_min: i32,
    pub azimuth_max: i32,
    pub elevation_min: i32,
    pub elevation_max: i32,
    pub step: i32,
    pub scan_frequency: i32,
    pub samples_per_orientation: i32,
}

impl Default for CustomScanParams {
    /// Lowest position of every slider on the console.
    fn default() -> Self {
        CustomScanParams {
            azimuth_min: 30,
            azimuth_max: 35,
            elevation_min: -60,
            elevation_max: -55,
            step: 5,
            scan_frequency: 1,
            samples_per_orientation: 3,
        }
    }
}
