#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Baud rate of the instrument's microcontroller link.
pub const BAUD_RATE: u32 = 9600;

/// Interpretation of the three integers of an inbound record.
///
/// Both formats look identical on the wire, so the deployment has to pick one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WireFormat {
    /// `azimuth_deg,elevation_deg,distance_mm`
    #[default]
    Spherical,
    /// `x,y,z` already converted by the firmware
    Cartesian,
}
