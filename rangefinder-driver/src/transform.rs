use crate::numeric::spherical_to_cartesian;
use rangefinder_data::{Point3D, ScanSample, WireFormat};

/// Maps a parsed record to a point of the cloud.
///
/// Any integer triple is accepted. Zero or negative distances give a well
/// defined point even though it has no physical meaning.
pub fn to_point(sample: &ScanSample, format: WireFormat) -> Point3D {
    match format {
        WireFormat::Spherical => {
            let (x, y, z) =
                spherical_to_cartesian(sample.a.into(), sample.b.into(), sample.c.into());
            Point3D::new(x, y, z)
        }
        WireFormat::Cartesian => Point3D::new(sample.a.into(), sample.b.into(), sample.c.into()),
    }
}
