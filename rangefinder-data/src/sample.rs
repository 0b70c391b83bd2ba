#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One inbound record: three integers whose meaning depends on the
/// [`WireFormat`](crate::WireFormat) in use.
///
/// For the spherical format `a` is the azimuth in degrees, `b` the elevation
/// in degrees and `c` the distance in mm. For the cartesian format they are
/// `x`, `y` and `z` in mm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanSample {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl ScanSample {
    pub fn new(a: i32, b: i32, c: i32) -> ScanSample {
        ScanSample { a, b, c }
    }
}

impl From<[i32; 3]> for ScanSample {
    fn from(fields: [i32; 3]) -> Self {
        ScanSample::new(fields[0], fields[1], fields[2])
    }
}
