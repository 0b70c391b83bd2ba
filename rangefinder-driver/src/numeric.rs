pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

/// Converts sensor head angles and a range reading to cartesian coordinates.
///
/// `elevation` is measured from the vertical axis, so an elevation of 90
/// degrees puts the point in the horizontal plane.
pub(crate) fn spherical_to_cartesian(
    azimuth_degree: f64,
    elevation_degree: f64,
    distance: f64,
) -> (f64, f64, f64) {
    let theta = degree_to_radian(elevation_degree);
    let phi = degree_to_radian(azimuth_degree);
    let x = distance * f64::sin(theta) * f64::cos(phi);
    let y = distance * f64::sin(theta) * f64::sin(phi);
    let z = distance * f64::cos(theta);
    (x, y, z)
}

pub(crate) fn to_string(data: &[u8]) -> String {
    data.iter()
        .map(|e| format!("{:02X}", e))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_to_radian() {
        assert!(f64::abs(degree_to_radian(180.) - std::f64::consts::PI) < 1e-12);
        assert!(f64::abs(degree_to_radian(-90.) + std::f64::consts::FRAC_PI_2) < 1e-12);
    }

    #[test]
    fn test_spherical_to_cartesian_on_axes() {
        let (x, y, z) = spherical_to_cartesian(0., 0., 50.);
        assert!(f64::abs(x) < 1e-9);
        assert!(f64::abs(y) < 1e-9);
        assert!(f64::abs(z - 50.) < 1e-9);

        let (x, y, z) = spherical_to_cartesian(0., 90., 50.);
        assert!(f64::abs(x - 50.) < 1e-9);
        assert!(f64::abs(y) < 1e-9);
        assert!(f64::abs(z) < 1e-9);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(to_string(&[0x2D, 0x63, 0x0A]), "2D 63 0A");
    }
}
